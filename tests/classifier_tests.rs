mod harness;
mod support;

use floatscout::domain::{classify, DealCriteria, Rejection, Verdict, Wear};

use support::listing::{buy_now, souvenir, with_wear, without_reference};

const AWP: &str = "AWP | Asiimov (Field-Tested)";

#[test]
fn ask_at_or_above_reference_is_never_a_deal() {
    let criteria = DealCriteria {
        min_discount: 0.0,
        ..DealCriteria::default()
    };

    for (price, reference) in [(10_000, 10_000), (12_000, 10_000), (50_000, 1_001)] {
        let listing = buy_now("1", AWP, price, reference);
        assert!(
            !classify(&listing, &criteria).is_deal(),
            "price {price} against reference {reference}"
        );
    }
}

#[test]
fn discount_equal_to_threshold_is_not_a_deal() {
    let criteria = DealCriteria::default();
    // 7600 against 10000 is exactly 24%.
    let listing = buy_now("1", AWP, 7_600, 10_000);

    assert!(matches!(
        classify(&listing, &criteria),
        Verdict::Rejected(Rejection::BelowThreshold { .. })
    ));

    let just_over = buy_now("2", AWP, 7_599, 10_000);
    assert!(classify(&just_over, &criteria).is_deal());
}

#[test]
fn thirty_percent_off_is_a_deal() {
    let listing = buy_now("1", AWP, 7_000, 10_000);
    let verdict = classify(&listing, &DealCriteria::default());

    let Verdict::Deal { discount } = verdict else {
        panic!("expected a deal, got {verdict}");
    };
    assert!((discount - 30.0).abs() < 1e-9);
}

#[test]
fn ten_percent_off_is_not_a_deal() {
    let listing = buy_now("1", AWP, 9_000, 10_000);
    assert!(!classify(&listing, &DealCriteria::default()).is_deal());
}

#[test]
fn missing_reference_is_ineligible_not_an_error() {
    let listing = without_reference(buy_now("1", AWP, 7_000, 10_000));
    assert!(matches!(
        classify(&listing, &DealCriteria::default()),
        Verdict::Ineligible(_)
    ));
}

#[test]
fn reference_must_exceed_floor() {
    let criteria = DealCriteria {
        min_price: 10_000,
        ..DealCriteria::default()
    };
    let listing = buy_now("1", AWP, 5_000, 10_000);

    assert!(matches!(
        classify(&listing, &criteria),
        Verdict::Rejected(Rejection::BelowPriceFloor { .. })
    ));
}

#[test]
fn filters_apply_only_when_disabled() {
    let worn = with_wear(buy_now("1", AWP, 7_000, 10_000), Wear::WellWorn);
    let scarred = with_wear(buy_now("2", AWP, 7_000, 10_000), Wear::BattleScarred);
    let memento = souvenir(buy_now("3", AWP, 7_000, 10_000));
    let strict = DealCriteria::default();

    assert!(!classify(&worn, &strict).is_deal());
    assert!(!classify(&scarred, &strict).is_deal());
    assert!(!classify(&memento, &strict).is_deal());

    let lenient = DealCriteria {
        include_well_worn: true,
        include_souvenir: true,
        ..DealCriteria::default()
    };
    assert!(classify(&worn, &lenient).is_deal());
    assert!(classify(&scarred, &lenient).is_deal());
    assert!(classify(&memento, &lenient).is_deal());
}

#[test]
fn allow_list_matches_substrings() {
    let criteria = DealCriteria::default();

    let knife = buy_now("1", "★ Karambit | Doppler (Factory New)", 7_000, 10_000);
    let pistol = buy_now("2", "Glock-18 | Fade (Factory New)", 7_000, 10_000);

    assert!(classify(&knife, &criteria).is_deal());
    assert_eq!(
        classify(&pistol, &criteria),
        Verdict::Rejected(Rejection::NotAllowListed)
    );
}
