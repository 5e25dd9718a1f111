use solid_common::discount::{CustomerTier, DiscountStrategy};
use solid_core::discount::{PremiumDiscount, StandardDiscount, VipDiscount, strategy_for};

#[test]
fn tier_discounts_on_one_hundred() -> anyhow::Result<()> {
    for (label, expected) in [("VIP", 20.0), ("PREMIUM", 10.0), ("STANDARD", 0.0)] {
        let tier: CustomerTier = label.parse()?;
        assert_eq!(strategy_for(tier).apply(100.0), expected, "{label}");
    }
    Ok(())
}

#[test]
fn strategies_share_one_contract() {
    let strategies: Vec<Box<dyn DiscountStrategy>> = vec![
        Box::new(StandardDiscount),
        Box::new(PremiumDiscount),
        Box::new(VipDiscount),
    ];
    let total: f64 = strategies.iter().map(|s| s.apply(200.0)).sum();
    assert_eq!(total, 60.0);
}

#[test]
fn unknown_tier_never_reaches_a_strategy() {
    assert!("gold".parse::<CustomerTier>().is_err());
    assert!("".parse::<CustomerTier>().is_err());
}
