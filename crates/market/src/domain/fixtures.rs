//! Shared league used by the domain unit tests

use liga_core::{LeagueSnapshot, MarketRules, Player, Team};
use rust_decimal_macros::dec;

use super::League;

pub const BETIS_ROLE: &str = "Capitán de Betis";
pub const SEVILLA_ROLE: &str = "Capitán de Sevilla";
pub const CADIZ_ROLE: &str = "Capitán de Cádiz";

/// Three teams, owned/free/blinded/captain players
///
/// - betis (100): Isco (value 20), Fekir (value 10), Joaquín (blinded)
/// - sevilla (50): Navas (captain)
/// - cadiz (20): empty roster
/// - free agents: Pedri (value 15), Gavi (no value)
pub fn sample_league() -> League {
    let m = dec!(1.5);
    let players = vec![
        Player::new("p1", "Isco").with_team("betis").with_value(dec!(20), m),
        Player::new("p2", "Fekir").with_team("betis").with_value(dec!(10), m),
        Player::new("p3", "Joaquín").with_team("betis").blinded(),
        Player::new("p4", "Navas").with_team("sevilla").captain(),
        Player::new("p5", "Pedri").with_value(dec!(15), m),
        Player::new("p6", "Gavi"),
    ];
    let teams = vec![
        Team::new("betis", BETIS_ROLE, dec!(100))
            .with_name("Real Betis")
            .with_players(["Isco", "Fekir", "Joaquín"]),
        Team::new("sevilla", SEVILLA_ROLE, dec!(50)).with_players(["Navas"]),
        Team::new("cadiz", CADIZ_ROLE, dec!(20)),
    ];

    League::new(MarketRules::default(), LeagueSnapshot::new(players, teams))
}
