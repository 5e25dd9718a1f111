use solid_common::discount::{CustomerTier, DiscountStrategy};

pub struct StandardDiscount;

impl DiscountStrategy for StandardDiscount {
    fn apply(&self, _amount: f64) -> f64 {
        0.0
    }

    fn tier(&self) -> CustomerTier {
        CustomerTier::Standard
    }
}

pub struct PremiumDiscount;

impl DiscountStrategy for PremiumDiscount {
    fn apply(&self, amount: f64) -> f64 {
        amount * 0.10
    }

    fn tier(&self) -> CustomerTier {
        CustomerTier::Premium
    }
}

pub struct VipDiscount;

impl DiscountStrategy for VipDiscount {
    fn apply(&self, amount: f64) -> f64 {
        amount * 0.20
    }

    fn tier(&self) -> CustomerTier {
        CustomerTier::Vip
    }
}

/// Picks the strategy registered for a tier.
pub fn strategy_for(tier: CustomerTier) -> &'static dyn DiscountStrategy {
    match tier {
        CustomerTier::Standard => &StandardDiscount,
        CustomerTier::Premium => &PremiumDiscount,
        CustomerTier::Vip => &VipDiscount,
    }
}
