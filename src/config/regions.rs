// src/config/regions.rs
//
// Region configuration: every country we curate, grouped by the parent
// region used by the geofabrik.de extracts, with the per-country minimum
// street frequency. The frequency floor is a policy knob: densely tagged
// countries use 3, sparse ones 2, so small countries are not filtered
// into emptiness while big ones don't drown the output in one-off
// garbage.
//
// The curation engine itself never reads this table; callers look the
// threshold up here and pass it in.

pub const REGIONS: &[(&str, &[(&str, u32)])] = &[
    ("africa", &[
        ("algeria", 3),
        ("angola", 2),
        ("benin", 2),
        ("botswana", 2),
        ("burkina-faso", 2),
        ("burundi", 2),
        ("cameroon", 2),
        ("canary-islands", 2),
        ("central-african-republic", 2),
        ("chad", 2),
        ("congo-brazzaville", 2),
        ("congo-democratic-republic", 2),
        ("egypt", 3),
        ("ethiopia", 2),
        ("ghana", 2),
        ("guinea", 2),
        ("ivory-coast", 2),
        ("kenya", 2),
        ("liberia", 2),
        ("libya", 2),
        ("madagascar", 2),
        ("malawi", 2),
        ("mali", 2),
        ("morocco", 2),
        ("mozambique", 2),
        ("namibia", 2),
        ("nigeria", 2),
        ("senegal-and-gambia", 2),
        ("south-africa", 2),
        ("sudan", 2),
        ("tanzania", 3),
        ("togo", 2),
        ("tunisia", 2),
        ("uganda", 2),
        ("zambia", 2),
        ("zimbabwe", 2),
    ]),
    ("central-america", &[
        ("belize", 2),
        ("costa-rica", 2),
        ("cuba", 2),
        ("el-salvador", 2),
        ("guatemala", 2),
        ("haiti-and-domrep", 2),
        ("honduras", 2),
        ("jamaica", 2),
        ("nicaragua", 2),
        ("panama", 2),
    ]),
    ("north-america", &[
        ("canada", 3),
        ("greenland", 2),
        ("mexico", 3),
        ("us", 3),
    ]),
    ("south-america", &[
        ("argentina", 3),
        ("bolivia", 2),
        ("brazil", 3),
        ("chile", 3),
        ("colombia", 2),
        ("ecuador", 2),
        ("guyana", 2),
        ("paraguay", 2),
        ("peru", 2),
        ("suriname", 2),
        ("uruguay", 3),
        ("venezuela", 2),
    ]),
    ("asia", &[
        ("afghanistan", 2),
        ("armenia", 3),
        ("azerbaijan", 2),
        ("bangladesh", 3),
        ("bhutan", 2),
        ("cambodia", 2),
        ("china", 3),
        ("gcc-states", 3),
        ("india", 3),
        ("indonesia", 3),
        ("iran", 3),
        ("iraq", 3),
        ("israel-and-palestine", 3),
        ("japan", 3),
        ("jordan", 3),
        ("kazakhstan", 3),
        ("kyrgyzstan", 2),
        ("laos", 2),
        ("lebanon", 2),
        ("malaysia-singapore-brunei", 3),
        ("mongolia", 3),
        ("myanmar", 3),
        ("nepal", 3),
        ("north-korea", 3),
        ("pakistan", 3),
        ("philippines", 3),
        ("russia", 3),
        ("south-korea", 3),
        ("sri-lanka", 3),
        ("syria", 3),
        ("taiwan", 3),
        ("tajikistan", 2),
        ("thailand", 3),
        ("turkmenistan", 3),
        ("uzbekistan", 3),
        ("vietnam", 3),
        ("yemen", 2),
    ]),
    ("europe", &[
        ("albania", 2),
        ("andorra", 2),
        ("austria", 3),
        ("azores", 2),
        ("belarus", 3),
        ("belgium", 2),
        ("bosnia-herzegovina", 2),
        ("bulgaria", 3),
        ("croatia", 3),
        ("cyprus", 2),
        ("czech-republic", 3),
        ("denmark", 3),
        ("estonia", 3),
        ("faroe-islands", 2),
        ("finland", 3),
        ("france", 3),
        ("georgia", 3),
        ("germany", 3),
        ("great-britain", 3),
        ("greece", 3),
        ("guernsey-jersey", 2),
        ("hungary", 2),
        ("iceland", 2),
        ("ireland-and-northern-ireland", 2),
        ("isle-of-man", 2),
        ("italy", 3),
        ("kosovo", 2),
        ("latvia", 3),
        ("liechtenstein", 2),
        ("lithuania", 3),
        ("luxembourg", 2),
        ("macedonia", 2),
        ("malta", 2),
        ("moldova", 2),
        ("monaco", 2),
        ("montenegro", 2),
        ("netherlands", 3),
        ("norway", 3),
        ("poland", 3),
        ("portugal", 3),
        ("romania", 2),
        ("serbia", 2),
        ("slovakia", 2),
        ("slovenia", 3),
        ("spain", 3),
        ("sweden", 3),
        ("switzerland", 3),
        ("turkey", 3),
        ("ukraine", 3),
    ]),
    ("australia-oceania", &[
        ("american-oceania", 2),
        ("australia", 3),
        ("fiji", 2),
        ("new-caledonia", 2),
        ("new-zealand", 3),
        ("papua-new-guinea", 2),
        ("polynesie-francaise", 2),
    ]),
];

/// Minimum street-name frequency below which an entry is dropped for the
/// given country. `None` for countries we don't know about.
pub fn min_street_frequency(country: &str) -> Option<u32> {
    REGIONS
        .iter()
        .flat_map(|(_, countries)| countries.iter())
        .find(|(c, _)| *c == country)
        .map(|(_, min)| *min)
}

/// Parent region of `country` (the geofabrik extract grouping).
pub fn country_region(country: &str) -> Option<&'static str> {
    REGIONS
        .iter()
        .find(|(_, countries)| countries.iter().any(|(c, _)| *c == country))
        .map(|(region, _)| *region)
}

/// All configured countries, in table order.
pub fn all_countries() -> Vec<&'static str> {
    REGIONS
        .iter()
        .flat_map(|(_, countries)| countries.iter().map(|(c, _)| *c))
        .collect()
}

/// "czech-republic" → "Czech Republic"
pub fn display_name(country: &str) -> String {
    country
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => s!(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
