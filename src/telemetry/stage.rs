//! Printer stage catalogue
//!
//! The printer reports its current sub-phase as an integer (`stg_cur`).
//! Most stages are legitimate parts of a print; a few mean the print is
//! paused on a fault, a few run the vision system and a few mean idle.

/// Stages where the printer paused on a fault
pub const ERROR_STAGES: [i32; 11] = [6, 17, 20, 21, 26, 27, 28, 32, 33, 34, 35];

/// Stages where the lidar or chamber camera is working and the strip must be dark
pub const CAMERA_OFF_STAGES: [i32; 6] = [8, 9, 10, 12, 18, 19];

/// Stages reported when no job is running
pub const IDLE_STAGES: [i32; 2] = [-1, 255];

/// How a stage code affects the light
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageClass {
    Error,
    CameraOff,
    Idle,
    Printing,
}

impl StageClass {
    /// Classify a raw stage code.
    ///
    /// Unknown codes are treated as printing.
    pub fn of(stage: i32) -> Self {
        if ERROR_STAGES.contains(&stage) {
            Self::Error
        } else if CAMERA_OFF_STAGES.contains(&stage) {
            Self::CameraOff
        } else if IDLE_STAGES.contains(&stage) {
            Self::Idle
        } else {
            Self::Printing
        }
    }
}

const STAGE_NAMES: [&str; 36] = [
    "printing",
    "auto_bed_leveling",
    "heatbed_preheating",
    "sweeping_xy_mech_mode",
    "changing_filament",
    "m400_pause",
    "paused_filament_runout",
    "heating_hotend",
    "calibrating_extrusion",
    "scanning_bed_surface",
    "inspecting_first_layer",
    "identifying_build_plate_type",
    "calibrating_micro_lidar",
    "homing_toolhead",
    "cleaning_nozzle_tip",
    "checking_extruder_temperature",
    "paused_user",
    "paused_front_cover_falling",
    "calibrating_micro_lidar",
    "calibrating_extrusion_flow",
    "paused_nozzle_temperature_malfunction",
    "paused_heat_bed_temperature_malfunction",
    "filament_unloading",
    "paused_skipped_step",
    "filament_loading",
    "calibrating_motor_noise",
    "paused_ams_lost",
    "paused_low_fan_speed_heat_break",
    "paused_chamber_temperature_control_error",
    "cooling_chamber",
    "paused_user_gcode",
    "motor_noise_showoff",
    "paused_nozzle_filament_covered_detected",
    "paused_cutter_error",
    "paused_first_layer_error",
    "paused_nozzle_clog",
];

/// Human readable name of a stage code, if known
pub fn stage_name(stage: i32) -> Option<&'static str> {
    if IDLE_STAGES.contains(&stage) {
        return Some("idle");
    }
    usize::try_from(stage)
        .ok()
        .and_then(|index| STAGE_NAMES.get(index).copied())
}
