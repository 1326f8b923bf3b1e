//! Hardware malfunction signalling (HMS) codes
//!
//! A report carries a list of `{attr, code}` pairs. Together they form a
//! 64-bit identifier `(attr << 32) | code`; the upper half of `code` is the
//! severity level.

/// One entry of the `hms` list in a printer report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HmsError {
    pub attribute: u32,
    pub code: u32,
}

impl HmsError {
    pub const fn new(attribute: u32, code: u32) -> Self {
        Self { attribute, code }
    }

    /// Build the entry back from its 64-bit identifier
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_id(id: u64) -> Self {
        Self {
            attribute: (id >> 32) as u32,
            code: id as u32,
        }
    }

    /// 64-bit identifier used by the catalogue
    #[allow(clippy::cast_lossless)]
    pub const fn id(self) -> u64 {
        ((self.attribute as u64) << 32) | self.code as u64
    }

    pub const fn severity(self) -> Severity {
        Severity::from_level(self.code >> 16)
    }

    /// Catalogue description, if the code is known
    pub fn description(self) -> Option<&'static str> {
        describe(self.id())
    }
}

/// HMS severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Fatal,
    Serious,
    Common,
    Info,
    /// Level outside the documented 1-4 range
    Unknown(u32),
}

impl Severity {
    pub const fn from_level(level: u32) -> Self {
        match level {
            1 => Self::Fatal,
            2 => Self::Serious,
            3 => Self::Common,
            4 => Self::Info,
            other => Self::Unknown(other),
        }
    }

    pub const fn level(self) -> u32 {
        match self {
            Self::Fatal => 1,
            Self::Serious => 2,
            Self::Common => 3,
            Self::Info => 4,
            Self::Unknown(level) => level,
        }
    }

    /// Fatal and serious problems stop the print, the rest only warn
    pub const fn is_fault(self) -> bool {
        self.level() < 3
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fatal => "fatal",
            Self::Serious => "serious",
            Self::Common => "common",
            Self::Info => "info",
            Self::Unknown(_) => "unknown",
        }
    }
}

/// "Inspecting first layer." The lidar is scanning, not a fault.
pub const FIRST_LAYER_INSPECTION: u64 = 0x0C00_0300_0003_000B;

#[rustfmt::skip]
static CATALOGUE: [(u64, &str); 108] = [
    (0x0300_1000_0002_0001, "The 1st order mechanical resonance mode of X axis is low."),
    (0x0300_1000_0002_0002, "The 1st order mechanical resonance mode of X axis differ much..."),
    (0x0300_0F00_0001_0001, "The accelerometer data is unavailable"),
    (0x0300_0D00_0001_000B, "The Z axis motor seems got stuck when moving up"),
    (0x0300_0D00_0001_0002, "Hotbed homing failed. The environmental vibration is too great"),
    (0x0300_0D00_0001_0003, "The build plate is not placed properly ..."),
    (0x0300_0D00_0002_0001, "Heatbed homing abnormal. There may be a bulge on the ..."),
    (0x0300_0A00_0001_0005, "the static voltage of force sensor 1/2/3 is not 0 ..."),
    (0x0300_0A00_0001_0004, "External disturbance was detected when testing the force sensor"),
    (0x0300_0A00_0001_0003, "The sensitivity of heatbed force sensor 1/2/3 is too low...."),
    (0x0300_0A00_0001_0002, "The sensitivity of heatbed force sensor 1/2/3 is low..."),
    (0x0300_0A00_0001_0001, "The sensitivity of heatbed force sensor 1/2/3 is too high..."),
    (0x0300_0400_0002_0001, "The speed of part cooling fan if too slow or stopped ..."),
    (0x0300_0300_0002_0002, "The speed of hotend fan is slow ..."),
    (0x0300_0300_0001_0001, "The speed of the hotend fan is too slow or stopped..."),
    (0x0300_0600_0001_0001, "Motor-A has an open-circuit. There may be a loose connection, or the motor may have failed."),
    (0x0300_0600_0001_0002, "Motor-A has a short-circuit. It may have failed."),
    (0x0300_0600_0001_0003, "The resistance of Motor-A is abnormal, the motor may have failed."),
    (0x0300_0100_0001_0001, "The heatbed temperature is abnormal, the heater may have a short circuit."),
    (0x0300_0100_0001_0002, "The heatbed temperature is abnormal, the heater may have an open circuit, or the thermal switch may be open."),
    (0x0300_0100_0001_0003, "The heatbed temperature is abnormal, the heater is over temperature."),
    (0x0300_0100_0001_0006, "The heatbed temperature is abnormal, the sensor may have a short circuit."),
    (0x0300_0100_0001_0007, "The heatbed temperature is abnormal, the sensor may have an open circuit."),
    (0x0300_1300_0001_0001, "The current sensor of Motor-A is abnormal. This may be caused by a failure of the hardware sampling circuit."),
    (0x0300_4000_0002_0001, "Data transmission over the serial port is abnormal, the software system may be faulty."),
    (0x0300_4100_0001_0001, "The system voltage is unstable, triggering the power failure protection function."),
    (0x0300_0200_0001_0001, "The nozzle temperature is abnormal, the heater may be short circuit."),
    (0x0300_0200_0001_0002, "The nozzle temperature is abnormal, the heater may be open circuit."),
    (0x0300_0200_0001_0003, "The nozzle temperature is abnormal, the heater is over temperature."),
    (0x0300_0200_0001_0006, "The nozzle temperature is abnormal, the sensor may be short circuit."),
    (0x0300_0200_0001_0007, "The nozzle temperature is abnormal, the sensor may be open circuit."),
    (0x0300_1200_0002_0001, "The front cover of the toolhead fell off."),
    (0x0C00_0100_0001_0001, "The Micro Lidar camera is offline."),
    (0x0700_0100_0001_0001, "AMS1 assist motor has slipped. The extrusion wheel may be worn down, or the filament may be too thin."),
    (0x0700_0100_0001_0003, "AMS1 assist motor torque control is malfunctioning. The current sensor may be faulty."),
    (0x0700_0100_0001_0004, "AMS1 assist motor speed control is malfunctioning. The speed sensor may be faulty."),
    (0x0700_0100_0002_0002, "AMS1 assist motor is overloaded. The filament may be tangled or stuck."),
    (0x0700_0200_0001_0001, "AMS1 filament speed and length error. The filament odometry may be faulty."),
    (0x0700_1000_0001_0001, "AMS1 slot 1 motor has slipped. The extrusion wheel may be malfunctioning, or the filament may be too thin."),
    (0x0700_1000_0001_0003, "AMS1 slot 1 motor torque control is malfunctioning. The current sensor may be faulty."),
    (0x0700_1000_0002_0002, "AMS1 slot 1 motor is overloaded. The filament may be tangled or stuck."),
    (0x0700_2000_0002_0001, "AMS1 slot 1 filament has run out."),
    (0x0700_2000_0002_0002, "AMS1 slot 1 is empty."),
    (0x0700_2000_0002_0003, "AMS1 slot 1 filament may be broken in AMS."),
    (0x0700_2000_0002_0004, "AMS1 slot 1 filament may be broken in the tool head."),
    (0x0700_2000_0002_0005, "AMS1 slot 1 filament has run out, and purging the old filament went abnormally, please check whether the filament is stuck in the tool head."),
    (0x0700_2000_0003_0001, "AMS1 slot 1 filament has run out. Please wait while old filament is purged."),
    (0x0700_2000_0003_0002, "AMS1 slot 1 filament has run out and automatically switched to the slot with the same filament."),
    (0x0700_6000_0002_0001, "AMS1 slot 1 is overloaded. The filament may be tangled or the spool may be stuck."),
    (0x0C00_0100_0002_0002, "The Micro Lidar camera is malfunctioning."),
    (0x0C00_0100_0001_0003, "Synchronization between Micro Lidar camera and MCU is abnormal."),
    (0x0C00_0100_0001_0004, "The Micro Lidar camera lens seems to be dirty."),
    (0x0C00_0100_0001_0005, "Micro Lidar OTP parameter is abnormal."),
    (0x0C00_0100_0002_0006, "Micro Lidar extrinsic parameter abnormal."),
    (0x0C00_0100_0002_0007, "Micro Lidar laser parameters are drifted."),
    (0x0C00_0100_0002_0008, "Failed to get image from chamber camera."),
    (0x0C00_0100_0001_0009, "Chamber camera dirty."),
    (0x0C00_0100_0001_000A, "The Micro Lidar LED may be broken."),
    (0x0C00_0100_0001_000B, "Failed to calibrate Micro Lidar."),
    (0x0C00_0200_0001_0001, "The horizontal laser is not lit."),
    (0x0C00_0200_0002_0002, "The horizontal laser is too thick."),
    (0x0C00_0200_0002_0003, "The horizontal laser is not bright enough."),
    (0x0C00_0200_0002_0004, "Nozzle height seems too low."),
    (0x0C00_0200_0001_0005, "A new Micro Lidar is detected."),
    (0x0C00_0200_0002_0006, "Nozzle height seems too high."),
    (0x0C00_0300_0002_0001, "Filament exposure metering failed."),
    (0x0C00_0300_0002_0002, "First layer inspection terminated due to abnormal lidar data."),
    (0x0C00_0300_0002_0004, "First layer inspection not supported for current print."),
    (0x0C00_0300_0002_0005, "First layer inspection timeout."),
    (0x0C00_0300_0003_0006, "Purged filaments may have piled up."),
    (0x0C00_0300_0003_0007, "Possible first layer defects."),
    (0x0C00_0300_0003_0008, "Possible spaghetti defects were detected."),
    (0x0C00_0300_0001_0009, "The first layer inspection module rebooted abnormally."),
    (0x0C00_0300_0003_000B, "Inspecting first layer."),
    (0x0C00_0300_0002_000C, "The build plate localization marker is not detected."),
    (0x0500_0100_0002_0001, "The media pipeline is malfunctioning."),
    (0x0500_0100_0002_0002, "USB camera is not connected."),
    (0x0500_0100_0002_0003, "USB camera is malfunctioning."),
    (0x0500_0100_0003_0004, "Not enough space in SD Card."),
    (0x0500_0100_0003_0005, "Error in SD Card."),
    (0x0500_0100_0003_0006, "Unformatted SD Card."),
    (0x0500_0200_0002_0001, "Failed to connect internet, please check the network connection."),
    (0x0500_0200_0002_0002, "Failed to login device."),
    (0x0500_0200_0002_0004, "Unauthorized user."),
    (0x0500_0200_0002_0006, "Liveview service is malfunctioning."),
    (0x0500_0300_0001_0001, "The MC module is malfunctioning. Please restart the device."),
    (0x0500_0300_0001_0002, "The toolhead is malfunctioning. Please restart the device."),
    (0x0500_0300_0001_0003, "The AMS module is malfunctioning. Please restart the device."),
    (0x0500_0300_0001_000A, "System state is abnormal. Please restore factory settings."),
    (0x0500_0300_0001_000B, "The screen is malfunctioning."),
    (0x0500_0300_0002_000C, "Wireless hardware error. Please turn off/on WiFi or restart the device."),
    (0x0500_0400_0001_0001, "Failed to download print job. Please check your network connection."),
    (0x0500_0400_0001_0002, "Failed to report print state. Please check your network connection."),
    (0x0500_0400_0001_0003, "The content of print file is unreadable. Please resend the print job."),
    (0x0500_0400_0001_0004, "The print file is unauthorized."),
    (0x0500_0400_0001_0006, "Failed to resume previous print."),
    (0x0500_0400_0002_0007, "The bed temperature exceeds the filament's vitrification temperature, which may cause a nozzle clog."),
    (0x0700_4000_0002_0001, "The filament buffer signal lost, the cable or position sensor may be malfunctioning."),
    (0x0700_4000_0002_0002, "The filament buffer position signal error, the position sensor may be malfunctioning."),
    (0x0700_4000_0002_0003, "The AMS Hub communication is abnormal, the cable may be not well connected."),
    (0x0700_4000_0002_0004, "The filament buffer signal is abnormal, the spring may be stuck."),
    (0x0700_4500_0002_0001, "The filament cutter sensor is malfunctioning. The sensor may be disconnected or damaged."),
    (0x0700_4500_0002_0002, "The filament cutter's cutting distance is too large. The XY motor may lose steps."),
    (0x0700_4500_0002_0003, "The filament cutter handle has not released. The handle or blade may be stuck."),
    (0x0700_5100_0003_0001, "AMS is disabled, please load filament from spool holder."),
    (0x07FF_2000_0002_0001, "External filament has run out, please load a new filament."),
    (0x07FF_2000_0002_0002, "External filament is missing, please load a new filament."),
    (0x07FF_2000_0002_0004, "Please pull out the filament on the spool holder from the extruder."),
];

/// Look up the description of a 64-bit HMS identifier
pub fn describe(id: u64) -> Option<&'static str> {
    CATALOGUE
        .iter()
        .find(|(code, _)| *code == id)
        .map(|(_, description)| *description)
}
