use solid_common::amount::format_amount;
use solid_common::discount::CustomerTier;
use solid_core::discount::strategy_for;

use crate::terminal::print;

pub fn discount(tier: CustomerTier, amount: f64) -> anyhow::Result<()> {
    let strategy = strategy_for(tier);

    print::aligned_line("Tier", tier);
    print::aligned_line("Amount", format_amount(amount));
    print::aligned_line("Discount", format_amount(strategy.apply(amount)));
    Ok(())
}
