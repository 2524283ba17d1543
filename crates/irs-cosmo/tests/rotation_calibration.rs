use irs_cosmo::{
    calibrate_alpha, linspace, rotation_curve_dimless, GalaxyParamsDimless,
    GalaxyParamsPhysical,
};

#[test]
fn dimensionless_curve_matches_closed_form() {
    let params = GalaxyParamsDimless::default();
    let curve = rotation_curve_dimless(&[3.0], &params).expect("curve");
    assert!((curve.m_baryon[0] - (1.0 - (-1.0f64).exp())).abs() < 1e-12);
    assert!((curve.m_extra[0] - 0.45).abs() < 1e-12);
    assert!((curve.v_baryon[0] - 0.459028).abs() < 1e-6);
    assert!((curve.v_total[0] - 0.600589).abs() < 1e-6);
}

#[test]
fn extra_term_never_lowers_the_velocity() {
    let radii = linspace(0.5, 25.0, 200).expect("grid");
    let curve = rotation_curve_dimless(&radii, &GalaxyParamsDimless::default()).expect("curve");
    assert_eq!(curve.len(), 200);
    for sample in curve.samples() {
        assert!(sample.v_total >= sample.v_baryon);
        assert!(sample.m_extra >= 0.0);
    }
}

#[test]
fn non_positive_radius_is_a_domain_violation() {
    let params = GalaxyParamsDimless::default();
    for bad in [0.0, -1.0, f64::NAN] {
        let err = rotation_curve_dimless(&[1.0, bad], &params).unwrap_err();
        assert!(err.is_domain(), "radius {bad} accepted");
        assert_eq!(err.info().code, "non-positive-radius");
    }
}

#[test]
fn invalid_dimensionless_params_are_rejected() {
    let params = GalaxyParamsDimless {
        r_d: 0.0,
        ..GalaxyParamsDimless::default()
    };
    assert!(rotation_curve_dimless(&[1.0], &params).unwrap_err().is_config());
}

#[test]
fn default_galaxy_calibrates_to_closed_form_alpha() {
    let galaxy = calibrate_alpha(&GalaxyParamsPhysical::default()).expect("calibrate");
    let expected = 6.428_951e9;
    assert!(((galaxy.alpha() - expected) / expected).abs() < 0.01);
}

#[test]
fn calibrated_alpha_reproduces_target_velocity() {
    let params = GalaxyParamsPhysical::default();
    let galaxy = calibrate_alpha(&params).expect("calibrate");
    let v = galaxy.velocity_at(params.r0).expect("velocity");
    assert!(((v - params.v_target) / params.v_target).abs() < 1e-6);
}

#[test]
fn physical_table_stays_above_baryons() {
    let galaxy = calibrate_alpha(&GalaxyParamsPhysical::default()).expect("calibrate");
    let radii = linspace(1.0, 30.0, 15).expect("grid");
    let curve = galaxy.rotation_curve(&radii).expect("curve");
    assert_eq!(curve.len(), 15);
    let outer = curve.v_total[14];
    assert!(outer > curve.v_baryon[14]);
    assert!(outer > 180.0 && outer < 195.0, "outer velocity {outer}");
    assert!(curve
        .samples()
        .all(|sample| sample.v_total > sample.v_baryon));
}

#[test]
fn density_at_reference_radius() {
    let galaxy = calibrate_alpha(&GalaxyParamsPhysical::default()).expect("calibrate");
    let reading = galaxy.extra_density(10.0).expect("density");
    assert!(((reading.per_kpc3 - 5.116e6) / 5.116e6).abs() < 1e-3);
    assert!((reading.per_pc3 - reading.per_kpc3 / 1e9).abs() < 1e-18);
    assert!(galaxy.extra_density(0.0).unwrap_err().is_domain());
}

#[test]
fn negative_alpha_limits_usable_radii() {
    let params = GalaxyParamsPhysical {
        v_target: 50.0,
        ..GalaxyParamsPhysical::default()
    };
    let galaxy = calibrate_alpha(&params).expect("calibrate");
    assert!(galaxy.alpha() < 0.0);
    let v = galaxy.velocity_at(params.r0).expect("velocity at r0");
    assert!(((v - 50.0) / 50.0).abs() < 1e-6);
    let err = galaxy.rotation_curve(&[1000.0]).unwrap_err();
    assert_eq!(err.info().code, "negative-enclosed-mass");
}
