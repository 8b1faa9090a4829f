//! Validation for tuning values that would break the controller.

use super::data::{ControllerConfig, SCHEMA_VERSION};

/// A validation error naming the offending field.
#[derive(Debug)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub value: f32,
    pub reason: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{} = {} is invalid: {}",
            self.section, self.field, self.value, self.reason
        )
    }
}

/// Helper macro for checking a value is strictly positive
macro_rules! check_positive {
    ($errors:expr, $section:expr, $field:ident, $value:expr) => {
        if $value <= 0.0 || !$value.is_finite() {
            $errors.push(ValidationError {
                section: $section,
                field: stringify!($field),
                value: $value,
                reason: "must be a finite value greater than zero",
            });
        }
    };
}

impl ControllerConfig {
    /// Validate all tuning values.
    /// Returns a list of validation errors, empty if the config is usable.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.schema_version != SCHEMA_VERSION {
            errors.push(ValidationError {
                section: "root",
                field: "schema_version",
                value: self.schema_version as f32,
                reason: "unsupported schema version",
            });
        }

        let m = &self.movement;
        check_positive!(errors, "movement", move_speed, m.move_speed);
        check_positive!(errors, "movement", jump_velocity, m.jump_velocity);
        check_positive!(errors, "movement", ground_check_radius, m.ground_check_radius);
        check_positive!(errors, "movement", body_width, m.body_size.0);
        check_positive!(errors, "movement", body_height, m.body_size.1);
        if m.gravity < 0.0 || !m.gravity.is_finite() {
            errors.push(ValidationError {
                section: "movement",
                field: "gravity",
                value: m.gravity,
                reason: "must be a finite value of zero or more",
            });
        }

        let c = &self.combat;
        // 1 / attack_rate is the cooldown, zero would divide by zero
        check_positive!(errors, "combat", attack_rate, c.attack_rate);
        check_positive!(errors, "combat", attack_range, c.attack_range);
        check_positive!(errors, "combat", flash_duration, c.flash_duration);

        check_positive!(errors, "audio", footstep_interval, self.audio.footstep_interval);

        errors
    }
}
