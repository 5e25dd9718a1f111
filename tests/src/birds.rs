use solid_common::bird::{Bird, BirdKind, Flyable};
use solid_core::birds::{Aviary, Ostrich, Sparrow};

#[test]
fn sparrow_keeps_fly_behavior() {
    assert_eq!(Sparrow.fly(), "flap");
}

#[test]
fn every_bird_works_through_the_base_contract() {
    let flock: [&dyn Bird; 2] = [&Sparrow, &Ostrich];
    assert!(flock.iter().all(|b| !b.name().is_empty()));
}

#[test]
fn only_flyers_resolve_to_flyable() -> anyhow::Result<()> {
    let sparrow = Aviary::from("sparrow".parse::<BirdKind>()?);
    let ostrich = Aviary::from("ostrich".parse::<BirdKind>()?);

    assert_eq!(sparrow.as_flyable().map(|f| f.fly()), Some(String::from("flap")));
    assert!(ostrich.as_flyable().is_none());
    assert!(ostrich.require_flyable().is_err());
    Ok(())
}
