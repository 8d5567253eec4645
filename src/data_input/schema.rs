// src/data_input/schema.rs

use crate::axis_names::COMPONENT_COUNT;
use crate::constants::VECTOR_DELIMITER;
use crate::data_input::log_data::{Quantity, TelemetryLog, VectorColumns};
use crate::data_input::log_parser::RawRow;
use crate::error::{Result, TelemetryError};

/// Fixed field-index table describing where each quantity lives in a row.
///
/// The table must match the writer's column order exactly; headers are never
/// consulted. Fields the table does not name are ignored, so a schema may read
/// a subset of a wider row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schema {
    pub name: &'static str,
    pub time: usize,
    pub charge: usize,
    pub vectors: &'static [(Quantity, usize)],
}

/// time | position | velocity | acceleration | rotation | sun_vector | charge
pub const SCHEMA_A: Schema = Schema {
    name: "a",
    time: 0,
    charge: 6,
    vectors: &[
        (Quantity::Position, 1),
        (Quantity::Velocity, 2),
        (Quantity::Acceleration, 3),
        (Quantity::Rotation, 4),
        (Quantity::SunVector, 5),
    ],
};

/// time | position | velocity | acceleration | rotation | rotational_velocity | sun_vector | charge
pub const SCHEMA_B: Schema = Schema {
    name: "b",
    time: 0,
    charge: 7,
    vectors: &[
        (Quantity::Position, 1),
        (Quantity::Velocity, 2),
        (Quantity::Acceleration, 3),
        (Quantity::Rotation, 4),
        (Quantity::RotationalVelocity, 5),
        (Quantity::SunVector, 6),
    ],
};

/// The simulator's history layout:
/// time | position | velocity | acceleration | rotation | rotational velocity |
/// rotational acceleration | sun | charge
pub const SCHEMA_SIMULATOR: Schema = Schema {
    name: "simulator",
    time: 0,
    charge: 8,
    vectors: &[
        (Quantity::Position, 1),
        (Quantity::Velocity, 2),
        (Quantity::Acceleration, 3),
        (Quantity::Rotation, 4),
        (Quantity::RotationalVelocity, 5),
        (Quantity::RotationalAcceleration, 6),
        (Quantity::SunVector, 7),
    ],
};

/// Simulator layout, reading only what the 3D trajectory needs.
pub const SCHEMA_TRAJECTORY: Schema = Schema {
    name: "trajectory",
    time: 0,
    charge: 8,
    vectors: &[(Quantity::Position, 1)],
};

pub const ALL_SCHEMAS: [&Schema; 4] = [
    &SCHEMA_A,
    &SCHEMA_B,
    &SCHEMA_SIMULATOR,
    &SCHEMA_TRAJECTORY,
];

impl Schema {
    /// Looks up a predefined schema by name (case-insensitive).
    pub fn by_name(name: &str) -> Result<&'static Schema> {
        ALL_SCHEMAS
            .into_iter()
            .find(|schema| schema.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| TelemetryError::UnknownSchema(name.to_string()))
    }

    /// Number of fields a row must have for every index in the table to exist.
    pub fn min_width(&self) -> usize {
        self.vectors
            .iter()
            .map(|&(_, index)| index)
            .chain([self.time, self.charge])
            .max()
            .map_or(0, |max| max + 1)
    }

    /// Unpacks raw rows into columnar arrays.
    ///
    /// Any malformed row aborts the whole unpack; nothing is skipped or
    /// defaulted.
    pub fn unpack(&self, rows: &[RawRow]) -> Result<TelemetryLog> {
        let mut log = TelemetryLog {
            time: Vec::with_capacity(rows.len()),
            charge: Vec::with_capacity(rows.len()),
            vectors: self
                .vectors
                .iter()
                .map(|&(quantity, _)| (quantity, VectorColumns::with_capacity(rows.len())))
                .collect(),
        };

        let needed = self.min_width();
        for (row_index, row) in rows.iter().enumerate() {
            // Header is line 1.
            let fields = RowFields {
                row,
                line: row_index + 2,
                needed,
            };
            log.time.push(fields.scalar(self.time, "time")?);
            for (slot, &(quantity, index)) in self.vectors.iter().enumerate() {
                let components = fields.vector(index, quantity.title())?;
                log.vectors[slot].1.push(components);
            }
            log.charge.push(fields.scalar(self.charge, "charge")?);
        }

        Ok(log)
    }
}

/// One raw row plus what error messages need to locate it.
struct RowFields<'r> {
    row: &'r RawRow,
    line: usize,
    needed: usize,
}

impl<'r> RowFields<'r> {
    fn get(&self, index: usize, field: &'static str) -> Result<&'r str> {
        self.row.get(index).ok_or_else(|| TelemetryError::MissingField {
            line: self.line,
            field,
            index,
            width: self.row.len(),
            needed: self.needed,
        })
    }

    fn scalar(&self, index: usize, field: &'static str) -> Result<f64> {
        parse_f64(self.get(index, field)?, field, self.line)
    }

    fn vector(&self, index: usize, field: &'static str) -> Result<[f64; COMPONENT_COUNT]> {
        parse_vector_field(self.get(index, field)?, field, self.line)
    }
}

fn parse_f64(text: &str, field: &'static str, line: usize) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|source| TelemetryError::ParseFloat {
            line,
            field,
            text: text.to_string(),
            source,
        })
}

/// Splits a comma-packed triple such as `"1.0,2.0,3.0"` into its components.
pub fn parse_vector_field(
    text: &str,
    field: &'static str,
    line: usize,
) -> Result<[f64; COMPONENT_COUNT]> {
    let parts: Vec<&str> = text.split(VECTOR_DELIMITER).collect();
    if parts.len() != COMPONENT_COUNT {
        return Err(TelemetryError::VectorArity {
            line,
            field,
            found: parts.len(),
            text: text.to_string(),
        });
    }
    Ok([
        parse_f64(parts[0], field, line)?,
        parse_f64(parts[1], field, line)?,
        parse_f64(parts[2], field, line)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::log_parser::load_rows_from_reader;

    fn rows(text: &str) -> Vec<RawRow> {
        load_rows_from_reader(text.as_bytes()).unwrap()
    }

    #[test]
    fn vector_field_splits_into_exact_components() {
        assert_eq!(parse_vector_field("1.0,2.0,3.0", "position", 2).unwrap(), [1.0, 2.0, 3.0]);
        assert_eq!(parse_vector_field("-1e3, 0.5 ,7", "sun", 2).unwrap(), [-1000.0, 0.5, 7.0]);
    }

    #[test]
    fn non_numeric_component_is_fatal() {
        let err = parse_vector_field("a,2,3", "position", 5).unwrap_err();
        match err {
            TelemetryError::ParseFloat { line, text, .. } => {
                assert_eq!(line, 5);
                assert_eq!(text, "a");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn vector_with_wrong_arity_is_fatal() {
        assert!(matches!(
            parse_vector_field("1,2", "position", 2),
            Err(TelemetryError::VectorArity { found: 2, .. })
        ));
        assert!(matches!(
            parse_vector_field("1,2,3,4", "position", 2),
            Err(TelemetryError::VectorArity { found: 4, .. })
        ));
    }

    #[test]
    fn unpacks_single_row_with_schema_a() {
        let log = SCHEMA_A
            .unpack(&rows("header\n0.0|1,2,3|0,0,0|0,0,0|0,0,0|0,0,0|10.0\n"))
            .unwrap();
        assert_eq!(log.time, vec![0.0]);
        let position = log.position().unwrap();
        assert_eq!(position.x, vec![1.0]);
        assert_eq!(position.y, vec![2.0]);
        assert_eq!(position.z, vec![3.0]);
        assert_eq!(log.charge, vec![10.0]);
        assert_eq!(log.vectors.len(), 5);
    }

    #[test]
    fn narrow_row_is_a_missing_field_error() {
        let err = SCHEMA_A
            .unpack(&rows("header\n0.0|1,2,3|0,0,0|0,0,0|0,0,0|0,0,0|10\n1.0|1,2,3|0,0,0\n"))
            .unwrap_err();
        match err {
            TelemetryError::MissingField {
                line,
                index,
                width,
                needed,
                ..
            } => {
                assert_eq!(line, 3);
                assert_eq!(index, 3);
                assert_eq!(width, 3);
                assert_eq!(needed, 7);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn schema_b_reads_rotational_velocity() {
        let log = SCHEMA_B
            .unpack(&rows("h\n2|0,0,0|0,0,0|0,0,0|0,0,0|0.1,0.2,0.3|1,0,0|4\n"))
            .unwrap();
        let rot_vel = log.vector(Quantity::RotationalVelocity).unwrap();
        assert_eq!(rot_vel.z, vec![0.3]);
        assert_eq!(log.vector(Quantity::SunVector).unwrap().x, vec![1.0]);
        assert_eq!(log.charge, vec![4.0]);
    }

    #[test]
    fn trajectory_schema_ignores_unused_fields() {
        let log = SCHEMA_TRAJECTORY
            .unpack(&rows("h\n0|7,8,9|junk|junk|junk|junk|junk|junk|3.5\n"))
            .unwrap();
        let points: Vec<_> = log.position().unwrap().points().collect();
        assert_eq!(points, vec![(7.0, 8.0, 9.0)]);
        assert_eq!(log.charge, vec![3.5]);
        assert_eq!(log.vectors.len(), 1);
    }

    #[test]
    fn min_width_covers_highest_index() {
        assert_eq!(SCHEMA_A.min_width(), 7);
        assert_eq!(SCHEMA_B.min_width(), 8);
        assert_eq!(SCHEMA_SIMULATOR.min_width(), 9);
        assert_eq!(SCHEMA_TRAJECTORY.min_width(), 9);
    }

    #[test]
    fn schemas_resolve_by_name() {
        assert_eq!(Schema::by_name("B").unwrap().name, "b");
        assert_eq!(Schema::by_name("simulator").unwrap().charge, 8);
        assert!(matches!(
            Schema::by_name("variant-z"),
            Err(TelemetryError::UnknownSchema(_))
        ));
    }
}

// src/data_input/schema.rs
