use irs_cosmo::{
    calibrate_alpha, decompose, CosmologyParams, GalaxyParamsPhysical, ObservationPoint,
    ObservationSet,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn omega_extra_identity_holds(
        h0 in 40.0f64..100.0,
        omega_b in 0.0f64..1.0,
        rows in prop::collection::vec((0.0f64..3.0, 30.0f64..300.0, 0.0f64..50.0), 1..20),
    ) {
        let points = rows
            .into_iter()
            .map(|(z, h, sigma_h)| ObservationPoint { z, h, sigma_h })
            .collect();
        let set = ObservationSet::from_points(points).unwrap();
        let cosmo = CosmologyParams::new(h0, omega_b).unwrap();
        let decomposed = decompose(&set, &cosmo).unwrap();
        prop_assert_eq!(decomposed.len(), set.len());
        for row in decomposed {
            prop_assert_eq!(row.omega_extra, row.e_z2 - row.omega_b_term);
        }
    }

    #[test]
    fn calibration_round_trips_target_velocity(
        g in 1e-6f64..1e-5,
        m0 in 1e9f64..1e11,
        r_d in 1.0f64..5.0,
        r0 in 1.0f64..30.0,
        v_target in 50.0f64..300.0,
    ) {
        let params = GalaxyParamsPhysical { g, m0, r_d, r0, v_target };
        let galaxy = calibrate_alpha(&params).unwrap();
        let v = galaxy.velocity_at(r0).unwrap();
        prop_assert!(((v - v_target) / v_target).abs() < 1e-6);
    }
}
