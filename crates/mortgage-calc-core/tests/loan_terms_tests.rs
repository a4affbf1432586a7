use mortgage_calc_core::loan_terms::validation::{self, *};
use mortgage_calc_core::loan_terms::{LoanInput, LoanTerms};
use mortgage_calc_core::ValidationError;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

// ===========================================================================
// Construction failures
// ===========================================================================

#[test]
fn test_non_positive_loan_amount_is_rejected() {
    for amount in [dec!(-5000), dec!(0)] {
        let err = LoanTerms::from_loan_amount(amount, 360, dec!(3.5)).unwrap_err();
        assert_eq!(err.messages(), [LOAN_AMOUNT_MESSAGE]);
    }
}

#[test]
fn test_interest_rate_outside_percent_range_is_rejected() {
    for rate in [dec!(-1), dec!(100.5)] {
        let err = LoanTerms::from_loan_amount(dec!(300000), 360, rate).unwrap_err();
        assert_eq!(err.messages(), [INTEREST_RATE_MESSAGE]);
    }
}

#[test]
fn test_non_positive_term_is_rejected() {
    for term in [0, -360] {
        let err = LoanTerms::from_loan_amount(dec!(300000), term, dec!(3.5)).unwrap_err();
        assert_eq!(err.messages(), [LOAN_TERM_MESSAGE]);
    }
}

#[test]
fn test_down_payment_at_or_above_price_is_rejected() {
    for down in [dec!(500000), dec!(600000)] {
        let err = LoanTerms::from_down_payment(dec!(500000), down, 360, dec!(3.5)).unwrap_err();
        assert_eq!(err.messages(), [DOWN_PAYMENT_MESSAGE]);
    }
}

#[test]
fn test_down_payment_percentage_outside_range_is_rejected() {
    for pct in [dec!(-5), dec!(101)] {
        let err = LoanTerms::from_down_payment_percentage(dec!(500000), 360, dec!(3.5), pct)
            .unwrap_err();
        assert_eq!(err.messages(), [DOWN_PAYMENT_PERCENTAGE_MESSAGE]);
    }
}

#[test]
fn test_all_violations_collected_at_once() {
    let err = LoanTerms::from_loan_amount(dec!(0), 0, dec!(-2)).unwrap_err();
    assert_eq!(
        err.messages(),
        [LOAN_AMOUNT_MESSAGE, LOAN_TERM_MESSAGE, INTEREST_RATE_MESSAGE]
    );
    assert_eq!(
        err.to_string(),
        format!("{LOAN_AMOUNT_MESSAGE}\n{LOAN_TERM_MESSAGE}\n{INTEREST_RATE_MESSAGE}")
    );
}

#[test]
fn test_percentage_shape_collects_all_violations() {
    let err = LoanTerms::from_down_payment_percentage(dec!(-1), 0, dec!(200), dec!(150))
        .unwrap_err();
    assert_eq!(
        err,
        ValidationError::new(vec![
            PURCHASE_PRICE_MESSAGE.to_string(),
            LOAN_TERM_MESSAGE.to_string(),
            INTEREST_RATE_MESSAGE.to_string(),
            DOWN_PAYMENT_PERCENTAGE_MESSAGE.to_string(),
        ])
    );
}

#[test]
fn test_amounts_beyond_cap_are_rejected() {
    let err = LoanTerms::from_loan_amount(rust_decimal::Decimal::MAX, 1, dec!(100)).unwrap_err();
    assert_eq!(err.messages(), [LOAN_AMOUNT_LIMIT_MESSAGE]);

    let price = dec!(10000000000000000000000000000);
    let err = LoanTerms::from_down_payment_percentage(price, 480, dec!(100), dec!(10)).unwrap_err();
    assert_eq!(err.messages(), [PURCHASE_PRICE_LIMIT_MESSAGE]);

    assert!(LoanTerms::from_loan_amount(MAX_AMOUNT, 1, dec!(100)).is_ok());
}

// ===========================================================================
// Derived loan amounts
// ===========================================================================

#[test]
fn test_loan_amount_from_absolute_down_payment() {
    let terms = LoanTerms::from_down_payment(dec!(500000), dec!(100000), 360, dec!(5)).unwrap();
    assert_eq!(terms.loan_amount(), dec!(400000));
    assert_eq!(terms.purchase_price(), Some(dec!(500000)));
    assert_eq!(terms.down_payment(), Some(dec!(100000)));
}

#[test]
fn test_loan_amount_from_down_payment_percentage() {
    let terms =
        LoanTerms::from_down_payment_percentage(dec!(500000), 360, dec!(5), dec!(20)).unwrap();
    assert_eq!(terms.loan_amount(), dec!(400000));
    assert_eq!(terms.down_payment(), Some(dec!(100000)));
}

#[test]
fn test_zero_down_payment_finances_full_price() {
    let terms = LoanTerms::from_down_payment(dec!(250000), dec!(0), 120, dec!(4)).unwrap();
    assert_eq!(terms.loan_amount(), dec!(250000));
}

// ===========================================================================
// Single-field pre-checks
// ===========================================================================

#[test]
fn test_single_field_check_matches_constructor_rule() {
    let mut errors = Vec::new();
    validation::validate_down_payment(dec!(300000), dec!(300000), &mut errors);
    let from_constructor =
        LoanTerms::from_down_payment(dec!(300000), dec!(300000), 360, dec!(3.5)).unwrap_err();
    assert_eq!(errors.as_slice(), from_constructor.messages());
}

// ===========================================================================
// Deserialization
// ===========================================================================

#[test]
fn test_input_shapes_from_json() {
    let inputs: Vec<LoanInput> = serde_json::from_str(
        r#"[
            {"purchase_price": 300000, "down_payment": 60000, "term_months": 360, "annual_interest_rate": 3.5},
            {"purchase_price": "500000", "down_payment_percentage": "20", "term_months": 360, "annual_interest_rate": "4"},
            {"loan_amount": 300000, "term_months": 360, "annual_interest_rate": 3.5}
        ]"#,
    )
    .unwrap();

    assert!(matches!(inputs[0], LoanInput::DownPayment { .. }));
    assert!(matches!(inputs[1], LoanInput::DownPaymentPercentage { .. }));
    assert!(matches!(inputs[2], LoanInput::LoanAmount { .. }));

    let loans: Vec<_> = inputs
        .iter()
        .map(|i| LoanTerms::try_from(i).unwrap().loan_amount())
        .collect();
    assert_eq!(loans, vec![dec!(240000), dec!(400000), dec!(300000)]);
}

#[test]
fn test_mixed_input_shapes_are_rejected() {
    for json in [
        r#"{"purchase_price": 500000, "down_payment": 100000, "down_payment_percentage": 50, "term_months": 360, "annual_interest_rate": 4}"#,
        r#"{"loan_amount": 1000, "purchase_price": 500000, "term_months": 360, "annual_interest_rate": 4}"#,
        r#"{"loan_amount": 1000, "term_months": 360, "annual_interest_rate": 4, "rate": 5}"#,
    ] {
        assert!(
            serde_json::from_str::<LoanInput>(json).is_err(),
            "accepted mixed shape {json}"
        );
        assert!(serde_json::from_str::<LoanTerms>(json).is_err());
    }
}

#[test]
fn test_terms_deserialize_only_when_valid() {
    let ok: LoanTerms =
        serde_json::from_str(r#"{"loan_amount": "1000", "term_months": 12, "annual_interest_rate": "6"}"#)
            .unwrap();
    assert_eq!(ok.term_months(), 12);

    let err = serde_json::from_str::<LoanTerms>(
        r#"{"loan_amount": "1000", "term_months": -12, "annual_interest_rate": "6"}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains(LOAN_TERM_MESSAGE));
}

#[test]
fn test_serialized_terms_read_back_identically() {
    let terms =
        LoanTerms::from_down_payment_percentage(dec!(420000), 300, dec!(5.25), dec!(15)).unwrap();
    let json = serde_json::to_string(&terms).unwrap();
    let back: LoanTerms = serde_json::from_str(&json).unwrap();
    assert_eq!(back, terms);
}

#[test]
fn test_terms_serialize_as_a_single_input_shape() {
    let derived = LoanTerms::from_down_payment(dec!(300000), dec!(60000), 360, dec!(3.5)).unwrap();
    let value = serde_json::to_value(&derived).unwrap();
    assert!(value.get("loan_amount").is_none());
    assert_eq!(value["down_payment"], "60000");

    let direct = LoanTerms::from_loan_amount(dec!(1000), 12, dec!(6)).unwrap();
    let back: LoanTerms = serde_json::from_value(serde_json::to_value(&direct).unwrap()).unwrap();
    assert_eq!(back, direct);
}
