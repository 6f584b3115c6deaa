use crate::utils::error::{LbError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LbError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Accepts ELBv2 target group ARNs, `arn:<partition>:elasticloadbalancing:...:targetgroup/<name>/<id>`.
pub fn validate_target_group_arn(field_name: &str, arn: &str) -> Result<()> {
    validate_non_empty_string(field_name, arn)?;

    let invalid = |reason: &str| LbError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: arn.to_string(),
        reason: reason.to_string(),
    };

    let parts: Vec<&str> = arn.splitn(6, ':').collect();
    if parts.len() != 6 || parts[0] != "arn" {
        return Err(invalid("Target group must be an ARN"));
    }

    if parts[2] != "elasticloadbalancing" {
        return Err(invalid("ARN does not belong to the elasticloadbalancing service"));
    }

    if !parts[5].starts_with("targetgroup/") {
        return Err(invalid("ARN does not name a target group"));
    }

    Ok(())
}

pub fn validate_instance_id(field_name: &str, instance: &str) -> Result<()> {
    validate_non_empty_string(field_name, instance)?;

    if instance.chars().any(char::is_whitespace) {
        return Err(LbError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: instance.to_string(),
            reason: "Instance id cannot contain whitespace".to_string(),
        });
    }

    Ok(())
}
