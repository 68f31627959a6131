//! Behaviour of the estimator across the whole catalog.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use printcalc::{
    estimate, estimate_detailed, CostBreakdown, Estimate, InputParameters, Report, MATERIALS,
    PRINTERS,
};

fn every_combination() -> impl Iterator<Item = InputParameters> {
    MATERIALS.into_iter().flat_map(|material| {
        PRINTERS.into_iter().map(move |printer| InputParameters {
            material_name: material.name.to_string(),
            printer_name: printer.name.to_string(),
            ..Default::default()
        })
    })
}

#[test]
fn zero_infill_uses_no_material() {
    for dims in [(50.0, 50.0, 20.0), (1.0, 300.0, 7.5), (220.0, 220.0, 250.0)] {
        for base in every_combination() {
            let params = InputParameters {
                length_mm: dims.0,
                width_mm: dims.1,
                height_mm: dims.2,
                infill_percent: 0.0,
                ..base
            };
            let result = estimate(&params);
            assert_eq!(result.weight_grams, 0.0);
            assert_eq!(result.material_cost, 0.0);
            assert!(result.electricity_cost > 0.0);
        }
    }
}

#[test]
fn total_is_sum_of_parts() {
    for params in every_combination() {
        let result = estimate(&params);
        assert_eq!(result.total_cost, result.material_cost + result.electricity_cost);
    }
}

#[test]
fn volume_is_linear_in_length() {
    let base = InputParameters {
        length_mm: 37.0,
        width_mm: 12.5,
        height_mm: 8.0,
        infill_percent: 35.0,
        ..Default::default()
    };
    let doubled = InputParameters {
        length_mm: base.length_mm * 2.0,
        ..base.clone()
    };

    let a = estimate_detailed(&base);
    let b = estimate_detailed(&doubled);
    assert_relative_eq!(b.result.volume_cm3, 2.0 * a.result.volume_cm3, epsilon = 1e-12);
    assert_relative_eq!(
        b.details.filled_volume_cm3,
        2.0 * a.details.filled_volume_cm3,
        epsilon = 1e-12
    );
    assert_relative_eq!(b.result.weight_grams, 2.0 * a.result.weight_grams, epsilon = 1e-12);
}

#[test]
fn weight_and_material_cost_share_filled_volume() {
    for params in every_combination() {
        let Estimate { result, details } = estimate_detailed(&params);
        let material = params.material();
        assert_relative_eq!(
            result.weight_grams,
            details.filled_volume_cm3 * material.density,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            result.material_cost,
            result.weight_grams / 1000.0 * material.cost_per_kg,
            epsilon = 1e-12
        );
    }
}

#[test]
fn unknown_names_resolve_to_first_entries() {
    let params = InputParameters {
        material_name: "Carbon Fiber PLA".into(),
        printer_name: "Voron 2.4".into(),
        ..Default::default()
    };
    assert_eq!(params.material().name, "PLA");
    assert_eq!(params.printer().name, "Ender 3");
    assert_eq!(estimate(&params), estimate(&InputParameters::default()));
}

#[test]
fn time_ignores_material_and_printer() {
    let hours: Vec<f64> = every_combination()
        .map(|p| estimate(&p).total_time_hours)
        .collect();
    assert!(hours.iter().all(|&h| h == hours[0]));
}

#[test]
fn faster_printing_is_cheaper_to_power() {
    let slow = estimate(&InputParameters::default());
    let fast = estimate(&InputParameters {
        print_speed_mm_per_sec: 100.0,
        ..Default::default()
    });
    assert_relative_eq!(fast.total_time_hours, slow.total_time_hours / 2.0, epsilon = 1e-12);
    assert_relative_eq!(fast.electricity_cost, slow.electricity_cost / 2.0, epsilon = 1e-12);
    assert_eq!(fast.material_cost, slow.material_cost);
}

#[test]
fn breakdown_round_trips_to_hundred_percent() {
    for params in every_combination() {
        let result = estimate(&params);
        let breakdown = CostBreakdown::from_result(&result);
        assert_abs_diff_eq!(breakdown.total_percent().unwrap(), 100.0, epsilon = 1e-9);

        let report = Report::new(&result);
        let parse = |s: &str| s.trim_end_matches('%').parse::<f64>().unwrap();
        let shown = parse(&report.material_share) + parse(&report.electricity_share);
        assert_abs_diff_eq!(shown, 100.0, epsilon = 0.1 + 1e-9);
    }
}

#[test]
fn degenerate_inputs_are_not_rejected() {
    let flat = estimate(&InputParameters {
        layer_height_mm: 0.0,
        ..Default::default()
    });
    assert!(flat.total_time_hours.is_infinite());
    assert!(flat.total_cost.is_infinite());

    let report = Report::new(&flat);
    assert_eq!(report.print_time, "-");
    assert_eq!(report.material_share, "-");
    assert_eq!(report.weight, "12.4 g");
}
