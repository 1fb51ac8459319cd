//! Bench experiments: a projectile launched from a height and a small
//! battery, bulb and resistor network. Listed as `sim101`..`sim103`.

use std::fmt;
use std::str::FromStr;

use vl_core::constants::G0_MPS2;
use vl_model::SimulationDef;

use crate::{out, var};

/// Sampling interval of [`Launch::trajectory`], seconds.
pub const TRAJECTORY_STEP_S: f64 = 0.1;

/// Launch conditions for a projectile leaving a point `height` above the ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Launch {
    pub angle_deg: f64,
    pub speed: f64,
    pub height: f64,
}

/// Flight summary of a [`Launch`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flight {
    pub time: f64,
    pub max_height: f64,
    pub range: f64,
}

impl Launch {
    fn velocity(&self) -> (f64, f64) {
        let angle = self.angle_deg.to_radians();
        (self.speed * angle.cos(), self.speed * angle.sin())
    }

    /// Time of flight from the positive root of `h + vy t - g t^2 / 2 = 0`.
    pub fn flight(&self) -> Flight {
        let (vx, vy) = self.velocity();
        let discriminant = vy * vy + 2.0 * G0_MPS2 * self.height;
        let time = (vy + discriminant.sqrt()) / G0_MPS2;
        Flight {
            time,
            max_height: self.height + vy * vy / (2.0 * G0_MPS2),
            range: vx * time,
        }
    }

    /// `(x, y)` points every [`TRAJECTORY_STEP_S`] from launch until landing.
    /// Points below ground are left out.
    pub fn trajectory(&self) -> Vec<(f64, f64)> {
        let (vx, vy) = self.velocity();
        let time = self.flight().time;
        if !time.is_finite() {
            return Vec::new();
        }

        (0..)
            .map(|k| k as f64 * TRAJECTORY_STEP_S)
            .take_while(|t| *t <= time)
            .map(|t| (vx * t, self.height + vy * t - 0.5 * G0_MPS2 * t * t))
            .filter(|(_, y)| *y >= 0.0)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connection {
    #[default]
    Series,
    Parallel,
}

impl FromStr for Connection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "series" => Ok(Connection::Series),
            "parallel" => Ok(Connection::Parallel),
            other => Err(format!("unknown connection '{other}' (expected series or parallel)")),
        }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Connection::Series => "series",
            Connection::Parallel => "parallel",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    /// Value in volts.
    Battery,
    /// Value in ohms.
    Bulb,
    /// Value in ohms.
    Resistor,
}

impl FromStr for ComponentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "battery" => Ok(ComponentKind::Battery),
            "bulb" => Ok(ComponentKind::Bulb),
            "resistor" => Ok(ComponentKind::Resistor),
            other => Err(format!("unknown component '{other}'")),
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ComponentKind::Battery => "battery",
            ComponentKind::Bulb => "bulb",
            ComponentKind::Resistor => "resistor",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Component {
    pub kind: ComponentKind,
    pub value: f64,
}

impl Component {
    pub fn new(kind: ComponentKind, value: f64) -> Self {
        Self { kind, value }
    }
}

/// Batteries, bulbs and resistors, each group wired in series or parallel.
///
/// Bulbs act as resistors. The bulb group sits in series with the resistor
/// group unless the bulbs are in parallel, in which case the two groups are
/// in parallel with each other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Circuit {
    pub components: Vec<Component>,
    pub batteries: Connection,
    pub bulbs: Connection,
    pub resistors: Connection,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircuitReading {
    pub voltage: f64,
    pub resistance: f64,
    pub current: f64,
    pub power: f64,
}

/// Series sum or parallel reciprocal sum; an empty group is 0.
fn combine(values: impl Iterator<Item = f64>, connection: Connection) -> f64 {
    let values: Vec<f64> = values.collect();
    if values.is_empty() {
        return 0.0;
    }
    match connection {
        Connection::Series => values.iter().sum(),
        Connection::Parallel => 1.0 / values.iter().map(|v| 1.0 / v).sum::<f64>(),
    }
}

impl Circuit {
    pub fn new(batteries: Connection, bulbs: Connection, resistors: Connection) -> Self {
        Self {
            components: Vec::new(),
            batteries,
            bulbs,
            resistors,
        }
    }

    pub fn with(mut self, kind: ComponentKind, value: f64) -> Self {
        self.components.push(Component::new(kind, value));
        self
    }

    fn values(&self, kind: ComponentKind) -> impl Iterator<Item = f64> + '_ {
        self.components
            .iter()
            .filter(move |c| c.kind == kind)
            .map(|c| c.value)
    }

    /// Series batteries add up; parallel batteries hold the first one's voltage.
    pub fn voltage(&self) -> f64 {
        match self.batteries {
            Connection::Series => self.values(ComponentKind::Battery).sum(),
            Connection::Parallel => self.values(ComponentKind::Battery).next().unwrap_or(0.0),
        }
    }

    pub fn resistance(&self) -> f64 {
        let resistors = combine(self.values(ComponentKind::Resistor), self.resistors);
        let bulbs = combine(self.values(ComponentKind::Bulb), self.bulbs);
        match self.bulbs {
            Connection::Parallel if resistors > 0.0 && bulbs > 0.0 => {
                1.0 / (1.0 / resistors + 1.0 / bulbs)
            }
            _ => resistors + bulbs,
        }
    }

    /// Ohm's law over the whole network. `None` when there is no positive
    /// resistance to drive a current through.
    pub fn solve(&self) -> Option<CircuitReading> {
        let resistance = self.resistance();
        if !(resistance.is_finite() && resistance > 0.0) {
            return None;
        }
        let voltage = self.voltage();
        let current = voltage / resistance;
        Some(CircuitReading {
            voltage,
            resistance,
            current,
            power: voltage * current,
        })
    }
}

/// Catalog outputs for a circuit; current and power are NaN without a load.
fn circuit_outputs(circuit: &Circuit) -> vl_model::OutputAssignment {
    let (current, power) = circuit
        .solve()
        .map_or((f64::NAN, f64::NAN), |r| (r.current, r.power));
    [
        ("V", circuit.voltage()),
        ("R", circuit.resistance()),
        ("I", current),
        ("P", power),
    ]
    .into()
}

pub(super) fn definitions() -> Vec<SimulationDef> {
    use ComponentKind::{Battery, Bulb, Resistor};
    use Connection::{Parallel, Series};

    vec![
        SimulationDef::builder("sim101", "Kinematics", "Projectile From Height")
            .description(
                "Projectile launched from a raised point: time of flight, peak height and \
                 horizontal range until it reaches the ground.",
            )
            .formula("T = (vy + √(vy² + 2 g h)) / g;  H = h + vy² / 2g;  R = vx T")
            .variable(var("angle", "Launch Angle θ", 0.0, 90.0, 45.0).unit("°").step(1.0))
            .variable(var("v", "Launch Speed", 0.0, 100.0, 20.0).unit("m/s").step(0.5))
            .variable(var("h", "Launch Height", 0.0, 200.0, 10.0).unit("m").step(0.5))
            .output(out("T", "Flight Time").unit("s"))
            .output(out("H", "Max Height").unit("m"))
            .output(out("R", "Range").unit("m"))
            .compute(|x| {
                let flight = Launch {
                    angle_deg: x["angle"],
                    speed: x["v"],
                    height: x["h"],
                }
                .flight();
                [("T", flight.time), ("H", flight.max_height), ("R", flight.range)].into()
            }),
        SimulationDef::builder("sim102", "Electricity", "Circuit Network (Series)")
            .description("Two batteries, a bulb and two resistors, all wired in series.")
            .formula("V = V1 + V2;  R = R1 + R2 + Rb;  I = V / R;  P = V I")
            .variable(var("V1", "Battery 1", 0.0, 24.0, 9.0).unit("V").step(0.5))
            .variable(var("V2", "Battery 2", 0.0, 24.0, 1.5).unit("V").step(0.5))
            .variable(var("Rb", "Bulb", 0.1, 500.0, 10.0).unit("Ω"))
            .variable(var("R1", "Resistor 1", 0.1, 1000.0, 100.0).unit("Ω"))
            .variable(var("R2", "Resistor 2", 0.1, 1000.0, 50.0).unit("Ω"))
            .output(out("V", "Total Voltage").unit("V"))
            .output(out("R", "Total Resistance").unit("Ω"))
            .output(out("I", "Current").unit("A"))
            .output(out("P", "Power").unit("W"))
            .compute(|x| {
                let circuit = Circuit::new(Series, Series, Series)
                    .with(Battery, x["V1"])
                    .with(Battery, x["V2"])
                    .with(Bulb, x["Rb"])
                    .with(Resistor, x["R1"])
                    .with(Resistor, x["R2"]);
                circuit_outputs(&circuit)
            }),
        SimulationDef::builder("sim103", "Electricity", "Circuit Network (Parallel)")
            .description(
                "A battery driving two bulbs in parallel alongside two resistors in parallel.",
            )
            .formula("Rr = 1/(1/R1 + 1/R2);  Rb = 1/(1/B1 + 1/B2);  R = 1/(1/Rr + 1/Rb);  I = V / R")
            .variable(var("V", "Battery", 0.0, 24.0, 9.0).unit("V").step(0.5))
            .variable(var("B1", "Bulb 1", 0.1, 500.0, 10.0).unit("Ω"))
            .variable(var("B2", "Bulb 2", 0.1, 500.0, 10.0).unit("Ω"))
            .variable(var("R1", "Resistor 1", 0.1, 1000.0, 100.0).unit("Ω"))
            .variable(var("R2", "Resistor 2", 0.1, 1000.0, 100.0).unit("Ω"))
            .output(out("V", "Total Voltage").unit("V"))
            .output(out("R", "Total Resistance").unit("Ω"))
            .output(out("I", "Current").unit("A"))
            .output(out("P", "Power").unit("W"))
            .compute(|x| {
                let circuit = Circuit::new(Parallel, Parallel, Parallel)
                    .with(Battery, x["V"])
                    .with(Bulb, x["B1"])
                    .with(Bulb, x["B2"])
                    .with(Resistor, x["R1"])
                    .with(Resistor, x["R2"]);
                circuit_outputs(&circuit)
            }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn launch_from_height() {
        let launch = Launch {
            angle_deg: 45.0,
            speed: 20.0,
            height: 10.0,
        };
        let flight = launch.flight();
        let vy = 20.0 * 45f64.to_radians().sin();
        let expected_t = (vy + (vy * vy + 2.0 * G0_MPS2 * 10.0).sqrt()) / G0_MPS2;
        assert!(close(flight.time, expected_t));
        assert!(close(flight.max_height, 10.0 + vy * vy / (2.0 * G0_MPS2)));
        assert!((flight.time - 3.4707).abs() < 1e-3);
        assert!((flight.range - 49.08).abs() < 1e-2);
    }

    #[test]
    fn level_launch_matches_range_formula() {
        let flight = Launch {
            angle_deg: 30.0,
            speed: 10.0,
            height: 0.0,
        }
        .flight();
        let expected = 100.0 * 60f64.to_radians().sin() / G0_MPS2;
        assert!(close(flight.range, expected));
    }

    #[test]
    fn trajectory_samples_until_landing() {
        let launch = Launch {
            angle_deg: 45.0,
            speed: 20.0,
            height: 10.0,
        };
        let points = launch.trajectory();
        // t = 0.0, 0.1, .., 3.4 with flight time ~3.47 s
        assert_eq!(points.len(), 35);
        assert_eq!(points[0], (0.0, 10.0));
        assert!(points.iter().all(|(_, y)| *y >= 0.0));
        assert!(points.windows(2).all(|w| w[1].0 > w[0].0));
    }

    #[test]
    fn launch_at_rest_lands_immediately() {
        let launch = Launch {
            angle_deg: 0.0,
            speed: 0.0,
            height: 0.0,
        };
        assert_eq!(launch.flight().time, 0.0);
        assert_eq!(launch.trajectory(), vec![(0.0, 0.0)]);
    }

    #[test]
    fn series_network() {
        let circuit = Circuit::default()
            .with(ComponentKind::Battery, 9.0)
            .with(ComponentKind::Battery, 1.5)
            .with(ComponentKind::Bulb, 10.0)
            .with(ComponentKind::Resistor, 100.0)
            .with(ComponentKind::Resistor, 50.0);
        let reading = circuit.solve().unwrap();
        assert_eq!(reading.voltage, 10.5);
        assert_eq!(reading.resistance, 160.0);
        assert!(close(reading.current, 10.5 / 160.0));
        assert!(close(reading.power, 10.5 * 10.5 / 160.0));
    }

    #[test]
    fn parallel_groups() {
        let circuit = Circuit::new(Connection::Parallel, Connection::Parallel, Connection::Parallel)
            .with(ComponentKind::Battery, 9.0)
            .with(ComponentKind::Battery, 12.0)
            .with(ComponentKind::Bulb, 10.0)
            .with(ComponentKind::Bulb, 10.0)
            .with(ComponentKind::Resistor, 100.0)
            .with(ComponentKind::Resistor, 100.0);
        // parallel batteries hold the first voltage
        assert_eq!(circuit.voltage(), 9.0);
        // 50 ohm resistors against 5 ohm bulbs
        assert!(close(circuit.resistance(), 1.0 / (1.0 / 50.0 + 1.0 / 5.0)));
    }

    #[test]
    fn parallel_bulbs_without_resistors_fall_back_to_sum() {
        let circuit = Circuit::new(Connection::Series, Connection::Parallel, Connection::Series)
            .with(ComponentKind::Battery, 6.0)
            .with(ComponentKind::Bulb, 4.0)
            .with(ComponentKind::Bulb, 4.0);
        assert_eq!(circuit.resistance(), 2.0);
        assert_eq!(circuit.solve().map(|r| r.current), Some(3.0));
    }

    #[test]
    fn no_load_has_no_reading() {
        let circuit = Circuit::default().with(ComponentKind::Battery, 9.0);
        assert_eq!(circuit.resistance(), 0.0);
        assert!(circuit.solve().is_none());
        let outputs = circuit_outputs(&circuit);
        assert_eq!(outputs.get("V"), Some(9.0));
        assert!(outputs.get("I").unwrap().is_nan());
    }

    #[test]
    fn connection_parsing() {
        assert_eq!("Parallel".parse::<Connection>(), Ok(Connection::Parallel));
        assert!("star".parse::<Connection>().is_err());
        assert_eq!("resistor".parse::<ComponentKind>(), Ok(ComponentKind::Resistor));
    }
}
