use chrono::Utc;
use impact_core::errors::ValidationError;
use impact_core::models::*;

fn line_item(rate: f64, hours: u32) -> ResourceLineItem {
    ResourceLineItem {
        id: 1,
        program: "ALPHA".into(),
        manager: "Dana".into(),
        role: "Integration consultant".into(),
        profile: ResourceProfile::Consultant,
        hourly_rate: rate,
        hours,
        subtotal: ResourceLineItem::compute_subtotal(rate, hours),
        recorded_at: Utc::now(),
    }
}

#[test]
fn program_names_are_normalized() {
    assert_eq!(normalize_program("  alpha rollout "), "ALPHA ROLLOUT");
    let id = Identification::new(" beta ", "Sam", vec![DeviationCategory::Retraining]);
    assert_eq!(id.program, "BETA");
}

#[test]
fn categories_text_joins_labels() {
    let id = Identification::new(
        "alpha",
        "Sam",
        vec![
            DeviationCategory::GoLiveChange,
            DeviationCategory::Infrastructure,
        ],
    );
    assert_eq!(id.categories_text(), "Go-Live Change, Infrastructure");
}

#[test]
fn deviation_labels_round_trip() {
    for cat in DeviationCategory::ALL {
        assert_eq!(DeviationCategory::from_label(cat.label()), Some(cat));
    }
    assert_eq!(DeviationCategory::from_label("Unknown"), None);
}

#[test]
fn profiles_round_trip() {
    for p in ResourceProfile::ALL {
        assert_eq!(ResourceProfile::parse(p.as_str()), Some(p));
    }
}

#[test]
fn update_recomputes_subtotal() {
    let mut item = line_item(150.0, 10);
    assert!(item.subtotal_is_consistent());

    let update = LineItemUpdate {
        hourly_rate: Some(200.0),
        hours: Some(12),
        ..Default::default()
    };
    update.apply(&mut item);
    assert_eq!(item.subtotal, 2_400.0);
    assert!(item.subtotal_is_consistent());
}

#[test]
fn new_line_item_requires_program_and_role() {
    let mut item = NewLineItem::new("", "Dana", "Dev", ResourceProfile::Developer, 100.0, 8);
    assert!(matches!(
        item.validate(),
        Err(ValidationError::EmptyField { ref field }) if field == "program"
    ));

    item.program = "alpha".into();
    item.role = "   ".into();
    assert!(matches!(
        item.validate(),
        Err(ValidationError::EmptyField { ref field }) if field == "role"
    ));
}

#[test]
fn new_line_item_rejects_bad_rates() {
    let mut item = NewLineItem::new("alpha", "Dana", "Dev", ResourceProfile::Developer, -1.0, 8);
    assert!(matches!(
        item.validate(),
        Err(ValidationError::NegativeValue { .. })
    ));
    item.hourly_rate = f64::NAN;
    assert!(matches!(
        item.validate(),
        Err(ValidationError::NonFiniteValue { .. })
    ));
    item.hourly_rate = 0.0;
    assert!(item.validate().is_ok());
    assert_eq!(item.subtotal(), 0.0);
}

#[test]
fn estimate_ordering_is_advisory() {
    assert!(ThreePointEstimate::new(1.0, 2.0, 3.0).validate().is_ok());
    assert!(ThreePointEstimate::point(5.0).is_ordered());
    assert!(matches!(
        ThreePointEstimate::new(3.0, 2.0, 1.0).validate(),
        Err(ValidationError::InvertedEstimate { .. })
    ));
}

#[test]
fn degenerate_monte_carlo_result() {
    let r = MonteCarloResult::degenerate(12.5);
    assert_eq!(r.mean, 12.5);
    assert_eq!(r.p95, 12.5);
    assert!(r.is_degenerate());
}

#[test]
fn severity_clamps() {
    assert_eq!(Severity::new(20.0).value(), 10.0);
    assert_eq!(Severity::new(-3.0).value(), 0.0);
    assert_eq!(Severity::new(f64::NAN).value(), 0.0);
    assert_eq!(Severity::user(0.0).value(), 1.0);
    assert_eq!(Severity::user(11.0).value(), 10.0);
    assert!(Severity::new(10.0).is_max());
    assert_eq!(Severity::new(7.24).to_string(), "7.2");
}

#[test]
fn radar_axes_are_ordered() {
    let radar = RiskRadarVector {
        scope_severity: Severity::user(3.0),
        cost_severity: Severity::new(10.0),
        schedule_severity: Severity::user(5.0),
    };
    let axes = radar.axes();
    assert_eq!(axes[0], ("scope", 3.0));
    assert_eq!(axes[1], ("cost", 10.0));
    assert_eq!(axes[2], ("schedule", 5.0));
}
