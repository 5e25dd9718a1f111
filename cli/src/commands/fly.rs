use solid_common::bird::BirdKind;
use solid_core::birds::Aviary;

use crate::terminal::print;

pub fn fly(kind: BirdKind) -> anyhow::Result<()> {
    let bird = Aviary::from(kind);
    let flight = bird.require_flyable()?.fly();

    print::aligned_line(bird.as_bird().name(), flight);
    Ok(())
}
