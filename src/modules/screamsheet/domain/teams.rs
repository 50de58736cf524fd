//! Team ids as the league APIs know them

pub const MLB_ANGELS: u32 = 108;
pub const MLB_ASTROS: u32 = 117;
pub const MLB_ATHLETICS: u32 = 133;
pub const MLB_BLUE_JAYS: u32 = 141;
pub const MLB_BRAVES: u32 = 144;
pub const MLB_BREWERS: u32 = 158;
pub const MLB_CARDINALS: u32 = 138;
pub const MLB_CUBS: u32 = 112;
pub const MLB_DIAMONDBACKS: u32 = 109;
pub const MLB_DODGERS: u32 = 119;
pub const MLB_GIANTS: u32 = 137;
pub const MLB_GUARDIANS: u32 = 114;
pub const MLB_MARINERS: u32 = 136;
pub const MLB_MARLINS: u32 = 146;
pub const MLB_METS: u32 = 121;
pub const MLB_NATIONALS: u32 = 120;
pub const MLB_ORIOLES: u32 = 110;
pub const MLB_PADRES: u32 = 135;
pub const MLB_PHILLIES: u32 = 143;
pub const MLB_PIRATES: u32 = 134;
pub const MLB_RANGERS: u32 = 140;
pub const MLB_RAYS: u32 = 139;
pub const MLB_RED_SOX: u32 = 111;
pub const MLB_REDS: u32 = 113;
pub const MLB_ROCKIES: u32 = 115;
pub const MLB_ROYALS: u32 = 118;
pub const MLB_TIGERS: u32 = 116;
pub const MLB_TWINS: u32 = 142;
pub const MLB_WHITE_SOX: u32 = 145;
pub const MLB_YANKEES: u32 = 147;

pub const NHL_FLYERS: u32 = 4;

/// Nickname and id of every MLB club
pub const MLB_TEAMS: &[(&str, u32)] = &[
    ("Angels", MLB_ANGELS),
    ("Astros", MLB_ASTROS),
    ("Athletics", MLB_ATHLETICS),
    ("Blue Jays", MLB_BLUE_JAYS),
    ("Braves", MLB_BRAVES),
    ("Brewers", MLB_BREWERS),
    ("Cardinals", MLB_CARDINALS),
    ("Cubs", MLB_CUBS),
    ("Diamondbacks", MLB_DIAMONDBACKS),
    ("Dodgers", MLB_DODGERS),
    ("Giants", MLB_GIANTS),
    ("Guardians", MLB_GUARDIANS),
    ("Mariners", MLB_MARINERS),
    ("Marlins", MLB_MARLINS),
    ("Mets", MLB_METS),
    ("Nationals", MLB_NATIONALS),
    ("Orioles", MLB_ORIOLES),
    ("Padres", MLB_PADRES),
    ("Phillies", MLB_PHILLIES),
    ("Pirates", MLB_PIRATES),
    ("Rangers", MLB_RANGERS),
    ("Rays", MLB_RAYS),
    ("Red Sox", MLB_RED_SOX),
    ("Reds", MLB_REDS),
    ("Rockies", MLB_ROCKIES),
    ("Royals", MLB_ROYALS),
    ("Tigers", MLB_TIGERS),
    ("Twins", MLB_TWINS),
    ("White Sox", MLB_WHITE_SOX),
    ("Yankees", MLB_YANKEES),
];

/// Case-insensitive lookup by nickname
pub fn mlb_team_id(name: &str) -> Option<u32> {
    MLB_TEAMS
        .iter()
        .find(|(team, _)| team.eq_ignore_ascii_case(name.trim()))
        .map(|(_, id)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_thirty_distinct_clubs() {
        let ids: HashSet<u32> = MLB_TEAMS.iter().map(|(_, id)| *id).collect();
        assert_eq!(ids.len(), 30);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(mlb_team_id("phillies"), Some(143));
        assert_eq!(mlb_team_id(" Red Sox "), Some(111));
        assert_eq!(mlb_team_id("Expos"), None);
    }
}
