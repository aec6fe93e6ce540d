//! Property tests for derivative colouring and gradient construction

use calcvis_color::{
    color_from_derivative, gradient, ColorScheme, CriticalKind, CriticalPoint,
};
use proptest::prelude::*;

fn scheme_strategy() -> impl Strategy<Value = ColorScheme> {
    prop_oneof![Just(ColorScheme::Light), Just(ColorScheme::Dark)]
}

fn kind_strategy() -> impl Strategy<Value = CriticalKind> {
    prop_oneof![
        Just(CriticalKind::Maximum),
        Just(CriticalKind::Minimum),
        Just(CriticalKind::Inflection),
    ]
}

proptest! {
    #[test]
    fn dark_channels_stay_visible(value in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
        let c = color_from_derivative(value, ColorScheme::Dark);
        prop_assert!(c.r >= 55 && c.g >= 55 && c.b >= 200);
    }

    #[test]
    fn light_red_grows_with_slope(a in -50.0f64..50.0, b in -50.0f64..50.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let c_lo = color_from_derivative(lo, ColorScheme::Light);
        let c_hi = color_from_derivative(hi, ColorScheme::Light);
        prop_assert!(c_lo.r <= c_hi.r);
        prop_assert!(c_lo.b >= c_hi.b);
    }

    #[test]
    fn gradient_positions_are_monotone_and_bounded(
        points in proptest::collection::vec((-1e6f64..1e6, kind_strategy()), 1..20),
        scheme in scheme_strategy(),
    ) {
        let points: Vec<CriticalPoint> = points
            .into_iter()
            .map(|(x, kind)| CriticalPoint::new(x, kind))
            .collect();
        let g = gradient(&points, scheme);

        prop_assert_eq!(g.stops.len(), points.len());
        prop_assert!(!g.is_placeholder());
        for stop in &g.stops {
            prop_assert!((0.0..=100.0).contains(&stop.position));
        }
        for w in g.stops.windows(2) {
            prop_assert!(w[0].position <= w[1].position);
        }
    }
}

#[test]
fn saturation_makes_extremes_indistinguishable() {
    for scheme in [ColorScheme::Light, ColorScheme::Dark] {
        assert_eq!(
            color_from_derivative(100.0, scheme),
            color_from_derivative(1000.0, scheme)
        );
        assert_eq!(
            color_from_derivative(-100.0, scheme),
            color_from_derivative(-1000.0, scheme)
        );
    }
}

#[test]
fn critical_points_ordered_by_x() {
    let points = [
        CriticalPoint::new(5.0, CriticalKind::Minimum),
        CriticalPoint::new(-5.0, CriticalKind::Maximum),
        CriticalPoint::new(0.0, CriticalKind::Inflection),
    ];
    let g = gradient(&points, ColorScheme::Dark);
    assert_eq!(
        g.to_css(),
        "linear-gradient(to right, #f87171 0%, #34d399 50%, #60a5fa 100%)"
    );
}
