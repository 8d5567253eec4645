// src/data_input/log_data.rs

use std::fmt;

use crate::axis_names::COMPONENT_COUNT;

/// A 3-axis physical quantity recorded as one comma-packed field per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    Position,
    Velocity,
    Acceleration,
    Rotation,
    RotationalVelocity,
    RotationalAcceleration,
    SunVector,
}

impl Quantity {
    /// Human-readable name, used for chart titles and error messages.
    pub fn title(self) -> &'static str {
        match self {
            Quantity::Position => "Position",
            Quantity::Velocity => "Velocity",
            Quantity::Acceleration => "Acceleration",
            Quantity::Rotation => "Rotation",
            Quantity::RotationalVelocity => "Rotational velocity",
            Quantity::RotationalAcceleration => "Rotational acceleration",
            Quantity::SunVector => "Sun vector",
        }
    }

    /// Unit shown on the y axis. The sun vector is dimensionless.
    pub fn unit(self) -> Option<&'static str> {
        match self {
            Quantity::Position => Some("[m]"),
            Quantity::Velocity => Some("[m/s]"),
            Quantity::Acceleration => Some("[m/s²]"),
            Quantity::Rotation => Some("[deg]"),
            Quantity::RotationalVelocity => Some("[deg/s]"),
            Quantity::RotationalAcceleration => Some("[deg/s²]"),
            Quantity::SunVector => None,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Columnar storage for one vector quantity: one array per component.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VectorColumns {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl VectorColumns {
    pub fn with_capacity(capacity: usize) -> Self {
        VectorColumns {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
            z: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, [x, y, z]: [f64; COMPONENT_COUNT]) {
        self.x.push(x);
        self.y.push(y);
        self.z.push(z);
    }

    /// Component array by index (0=x, 1=y, 2=z).
    pub fn component(&self, index: usize) -> &[f64] {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => &self.z,
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterates the samples as `(x, y, z)` points.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(|((&x, &y), &z)| (x, y, z))
    }
}

/// Parallel arrays unpacked from a telemetry log, in row order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TelemetryLog {
    /// Seconds.
    pub time: Vec<f64>,
    /// Battery charge [Wh].
    pub charge: Vec<f64>,
    /// One entry per vector quantity, in schema order.
    pub vectors: Vec<(Quantity, VectorColumns)>,
}

impl TelemetryLog {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn vector(&self, quantity: Quantity) -> Option<&VectorColumns> {
        self.vectors
            .iter()
            .find(|(q, _)| *q == quantity)
            .map(|(_, columns)| columns)
    }

    pub fn position(&self) -> Option<&VectorColumns> {
        self.vector(Quantity::Position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_components_parallel() {
        let mut columns = VectorColumns::with_capacity(2);
        columns.push([1.0, 2.0, 3.0]);
        columns.push([4.0, 5.0, 6.0]);
        assert_eq!(columns.len(), 2);
        assert_eq!(columns.component(1), &[2.0, 5.0]);
        let points: Vec<_> = columns.points().collect();
        assert_eq!(points, vec![(1.0, 2.0, 3.0), (4.0, 5.0, 6.0)]);
    }

    #[test]
    fn vector_lookup_by_quantity() {
        let mut log = TelemetryLog::default();
        log.vectors.push((Quantity::SunVector, VectorColumns::default()));
        assert!(log.vector(Quantity::SunVector).is_some());
        assert!(log.position().is_none());
    }

    #[test]
    fn sun_vector_has_no_unit() {
        assert_eq!(Quantity::SunVector.unit(), None);
        assert_eq!(Quantity::Acceleration.unit(), Some("[m/s²]"));
        assert_eq!(Quantity::RotationalVelocity.to_string(), "Rotational velocity");
    }
}

// src/data_input/log_data.rs
