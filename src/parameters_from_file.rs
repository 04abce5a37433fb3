//! Supports extracting the DH table from a YAML file (optional)

use crate::parameter_error::ParameterError;
use crate::parameters::ur_kinematics::{DhRow, DhTable};
use std::path::Path;
use yaml_rust2::{Yaml, YamlLoader};

impl DhTable {
    /// Read the DH table from a YAML file like this (the format
    /// [DhTable::to_yaml] writes):
    /// ```yaml
    /// # Universal Robots UR5
    /// dh_table:
    ///   - { joint_distance: 0.0892, joint_angle: 0, link_length: 0, link_twist: deg(90) }
    ///   - { joint_distance: 0.0663, joint_angle: 0, link_length: 0.425, link_twist: 0 }
    ///   - { joint_distance: 0, joint_angle: 0, link_length: 0.39225, link_twist: 0 }
    ///   - { joint_distance: 0.0437, joint_angle: 0, link_length: 0, link_twist: deg(90) }
    ///   - { joint_distance: 0.09475, joint_angle: 0, link_length: 0, link_twist: deg(-90) }
    ///   - { joint_distance: 0.0825, joint_angle: 0, link_length: 0, link_twist: 0 }
    /// ```
    /// Angles take plain radians or the deg(value) notation.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Same as [DhTable::from_yaml_file], from an already loaded string.
    pub fn from_yaml(text: &str) -> Result<Self, ParameterError> {
        let docs = YamlLoader::load_from_str(text)
            .map_err(|e| ParameterError::ParseError(e.to_string()))?;
        let doc = docs
            .first()
            .ok_or_else(|| ParameterError::ParseError("empty YAML document".to_string()))?;
        let rows = doc["dh_table"]
            .as_vec()
            .ok_or_else(|| ParameterError::MissingField("dh_table".to_string()))?;
        if rows.len() != 6 {
            return Err(ParameterError::InvalidLength { expected: 6, found: rows.len() });
        }

        let mut table = [DhRow::new(0.0, 0.0, 0.0, 0.0); 6];
        for (i, row) in rows.iter().enumerate() {
            table[i] = DhRow::new(
                length(row, i, "joint_distance")?,
                angle(row, i, "joint_angle")?,
                length(row, i, "link_length")?,
                angle(row, i, "link_twist")?,
            );
        }
        Ok(DhTable::new(table))
    }
}

/// YAML numbers arrive as Real or Integer depending on how they are written.
fn number(value: &Yaml) -> Option<f64> {
    value.as_f64().or_else(|| value.as_i64().map(|v| v as f64))
}

fn finite(value: f64, index: usize, field: &str) -> Result<f64, ParameterError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParameterError::NonFinite(format!("dh_table[{}].{}", index, field)))
    }
}

fn length(row: &Yaml, index: usize, field: &str) -> Result<f64, ParameterError> {
    let value = number(&row[field])
        .ok_or_else(|| ParameterError::MissingField(format!("dh_table[{}].{}", index, field)))?;
    finite(value, index, field)
}

/// Angles accept radians (as a number) or the deg(value) wrapper.
fn angle(row: &Yaml, index: usize, field: &str) -> Result<f64, ParameterError> {
    let value = &row[field];
    if value.is_badvalue() {
        return Err(ParameterError::MissingField(format!("dh_table[{}].{}", index, field)));
    }
    if let Some(radians) = number(value) {
        return finite(radians, index, field);
    }
    if let Some(text) = value.as_str() {
        if let Some(inner) = text.trim().strip_prefix("deg(").and_then(|t| t.strip_suffix(')')) {
            if let Ok(degrees) = inner.trim().parse::<f64>() {
                return finite(degrees.to_radians(), index, field);
            }
        }
        return Err(ParameterError::WrongAngle(format!(
            "dh_table[{}].{}: {}", index, field, text
        )));
    }
    Err(ParameterError::WrongAngle(format!("dh_table[{}].{}", index, field)))
}

#[cfg(test)]
mod tests {
    use crate::parameters::ur_kinematics::DhTable;

    #[test]
    fn test_round_trip_through_yaml() {
        let reference = DhTable::ur5();
        let parsed = DhTable::from_yaml(&reference.to_yaml()).expect("own output must parse");
        for (a, b) in parsed.rows.iter().zip(reference.rows.iter()) {
            assert!((a.joint_distance - b.joint_distance).abs() < 1e-12);
            assert!((a.link_length - b.link_length).abs() < 1e-12);
            // Angles went through deg() formatting with 4 decimals.
            assert!((a.joint_angle - b.joint_angle).abs() < 1e-6);
            assert!((a.link_twist - b.link_twist).abs() < 1e-6);
        }
    }

    #[test]
    fn test_rejects_short_table() {
        let yaml = "dh_table:\n  - { joint_distance: 0.1, joint_angle: 0, link_length: 0, link_twist: 0 }\n";
        assert!(DhTable::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_rejects_malformed_angle() {
        let mut yaml = String::from("dh_table:\n");
        for _ in 0..6 {
            yaml.push_str("  - { joint_distance: 0.1, joint_angle: spin, link_length: 0, link_twist: 0 }\n");
        }
        assert!(DhTable::from_yaml(&yaml).is_err());
    }
}
