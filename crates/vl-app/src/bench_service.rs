//! Bench helpers for front ends: the chemistry beaker, the circuit board,
//! the launcher and the gene expression bench.

use vl_bio::Expression;
use vl_catalog::{Circuit, Component, ComponentKind, Connection, Launch};
use vl_chem::{AnalysisRequest, DEFAULT_VOLUME_ML, Mixture, ReactionContext, Reagent};

use crate::error::{AppError, AppResult};

/// Parse `name` or `name:ml`. Name matching is by reagent name or formula.
pub fn parse_reagent_spec(spec: &str) -> AppResult<(&'static Reagent, f64)> {
    let (name, volume) = match spec.rsplit_once(':') {
        Some((name, ml)) => {
            let ml = ml.trim();
            let volume: f64 = ml
                .parse()
                .map_err(|_| AppError::InvalidInput(format!("'{ml}' is not a volume in ml")))?;
            (name, volume)
        }
        None => (spec, DEFAULT_VOLUME_ML),
    };

    if !(volume.is_finite() && volume > 0.0) {
        return Err(AppError::InvalidInput(format!(
            "volume must be positive, got {volume}"
        )));
    }
    let reagent =
        vl_chem::find(name).ok_or_else(|| AppError::UnknownReagent(name.trim().to_string()))?;
    Ok((reagent, volume))
}

pub fn build_mixture(specs: &[String]) -> AppResult<Mixture> {
    let mut mixture = Mixture::new();
    for spec in specs {
        let (reagent, volume) = parse_reagent_spec(spec)?;
        mixture.add_volume(reagent, volume);
    }
    Ok(mixture)
}

/// The request a front end would post to the analysis proxy for `specs`.
pub fn analysis_request(specs: &[String], temperature_c: f64, heating: bool) -> AppResult<AnalysisRequest> {
    let mixture = build_mixture(specs)?;
    let context = ReactionContext::for_mixture(&mixture, temperature_c, heating);
    let request = AnalysisRequest::from_mixture(&mixture, Some(context))?;
    request.validate()?;
    Ok(request)
}

/// Parse `kind:value`, e.g. `battery:9` or `resistor:100`.
pub fn parse_component_spec(spec: &str) -> AppResult<Component> {
    let (kind, value) = spec
        .split_once(':')
        .ok_or_else(|| AppError::InvalidInput(format!("'{spec}' is not KIND:VALUE")))?;
    let kind: ComponentKind = kind.parse().map_err(AppError::InvalidInput)?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("'{}' is not a number", value.trim())))?;

    let valid = match kind {
        ComponentKind::Battery => value.is_finite() && value >= 0.0,
        ComponentKind::Bulb | ComponentKind::Resistor => value.is_finite() && value > 0.0,
    };
    if !valid {
        return Err(AppError::InvalidInput(format!("{kind} cannot take {value}")));
    }
    Ok(Component::new(kind, value))
}

pub fn build_circuit(
    specs: &[String],
    batteries: Connection,
    bulbs: Connection,
    resistors: Connection,
) -> AppResult<Circuit> {
    let mut circuit = Circuit::new(batteries, bulbs, resistors);
    for spec in specs {
        circuit.components.push(parse_component_spec(spec)?);
    }
    Ok(circuit)
}

/// Launch conditions checked against the launcher's limits.
pub fn launch(angle_deg: f64, speed: f64, height: f64) -> AppResult<Launch> {
    if !(0.0..=90.0).contains(&angle_deg) {
        return Err(AppError::InvalidInput(format!(
            "launch angle must be within 0..=90 degrees, got {angle_deg}"
        )));
    }
    for (what, value) in [("speed", speed), ("height", height)] {
        if !(value.is_finite() && value >= 0.0) {
            return Err(AppError::InvalidInput(format!(
                "launch {what} must be non-negative, got {value}"
            )));
        }
    }
    Ok(Launch {
        angle_deg,
        speed,
        height,
    })
}

pub fn express_dna(dna: &str) -> AppResult<Expression> {
    Ok(vl_bio::express(dna)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_with_and_without_volume() {
        let (r, v) = parse_reagent_spec("Water").unwrap();
        assert_eq!((r.id, v), (1, DEFAULT_VOLUME_ML));
        let (r, v) = parse_reagent_spec("hcl:25").unwrap();
        assert_eq!((r.id, v), (3, 25.0));
        assert!(matches!(parse_reagent_spec("Water:-1"), Err(AppError::InvalidInput(_))));
        assert!(matches!(parse_reagent_spec("Mercury"), Err(AppError::UnknownReagent(_))));
    }

    #[test]
    fn analysis_needs_two_reagents() {
        let err = analysis_request(&["HCl".to_string()], 25.0, false).unwrap_err();
        assert!(matches!(err, AppError::Analysis(_)));

        let req = analysis_request(&["HCl".to_string(), "NaOH:5".to_string()], 25.0, false).unwrap();
        assert_eq!(req.reactant_names[1], "Sodium Hydroxide (5ml)");
    }

    #[test]
    fn component_specs() {
        let c = parse_component_spec("Resistor: 220").unwrap();
        assert_eq!((c.kind, c.value), (ComponentKind::Resistor, 220.0));
        assert!(matches!(parse_component_spec("bulb:0"), Err(AppError::InvalidInput(_))));
        assert!(matches!(parse_component_spec("capacitor:1"), Err(AppError::InvalidInput(_))));
        assert!(matches!(parse_component_spec("battery"), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn circuit_from_specs() {
        let specs = ["battery:9", "bulb:10", "resistor:100", "resistor:50"].map(String::from);
        let circuit = build_circuit(
            &specs,
            Connection::Series,
            Connection::Series,
            Connection::Series,
        )
        .unwrap();
        let reading = circuit.solve().unwrap();
        assert_eq!(reading.resistance, 160.0);
        assert_eq!(reading.voltage, 9.0);
    }

    #[test]
    fn launch_limits() {
        assert!(launch(45.0, 20.0, 10.0).is_ok());
        assert!(matches!(launch(95.0, 20.0, 0.0), Err(AppError::InvalidInput(_))));
        assert!(matches!(launch(45.0, -1.0, 0.0), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn dna_errors_surface_as_genetics() {
        assert_eq!(express_dna("ATGC").unwrap().rna, "UACG");
        assert!(matches!(express_dna("ATBC"), Err(AppError::Genetics(_))));
    }
}
