//! Country name to geo target constant ID lookup.

use sobs_core::Location;

use crate::error::KeywordsError;

/// Country names and their Google Ads geo target constant IDs, sorted by name.
pub const COUNTRY_GEO_TARGETS: &[(&str, &str)] = &[
    ("Afghanistan", "2004"),
    ("Albania", "2008"),
    ("Algeria", "2012"),
    ("American Samoa", "2016"),
    ("Andorra", "2020"),
    ("Angola", "2024"),
    ("Anguilla", "2660"),
    ("Antarctica", "2010"),
    ("Antigua and Barbuda", "2028"),
    ("Argentina", "2032"),
    ("Armenia", "2051"),
    ("Aruba", "2533"),
    ("Australia", "2036"),
    ("Austria", "2040"),
    ("Azerbaijan", "2031"),
    ("Bahamas", "2044"),
    ("Bahrain", "2048"),
    ("Bangladesh", "2050"),
    ("Barbados", "2052"),
    ("Belarus", "2112"),
    ("Belgium", "2056"),
    ("Belize", "2084"),
    ("Benin", "2204"),
    ("Bermuda", "2060"),
    ("Bhutan", "2064"),
    ("Bolivia", "2068"),
    ("Bosnia and Herzegovina", "2070"),
    ("Botswana", "2072"),
    ("Bouvet Island", "2074"),
    ("Brazil", "2076"),
    ("British Indian Ocean Territory", "2086"),
    ("Brunei", "2096"),
    ("Bulgaria", "2100"),
    ("Burkina Faso", "2854"),
    ("Burundi", "2108"),
    ("Cambodia", "2116"),
    ("Cameroon", "2120"),
    ("Canada", "2124"),
    ("Cape Verde", "2132"),
    ("Cayman Islands", "2136"),
    ("Central African Republic", "2140"),
    ("Chad", "2148"),
    ("Chile", "2152"),
    ("China", "2156"),
    ("Christmas Island", "2162"),
    ("Cocos (Keeling) Islands", "2166"),
    ("Colombia", "2170"),
    ("Comoros", "2174"),
    ("Congo", "2178"),
    ("Cook Islands", "2184"),
    ("Costa Rica", "2188"),
    ("Croatia", "2191"),
    ("Cuba", "2192"),
    ("Cyprus", "2196"),
    ("Czech Republic", "2203"),
    ("Denmark", "2208"),
    ("Djibouti", "2262"),
    ("Dominica", "2212"),
    ("Dominican Republic", "2214"),
    ("East Timor", "2626"),
    ("Ecuador", "2218"),
    ("Egypt", "2818"),
    ("El Salvador", "2222"),
    ("Equatorial Guinea", "2226"),
    ("Eritrea", "2232"),
    ("Estonia", "2233"),
    ("Ethiopia", "2231"),
    ("Falkland Islands", "2238"),
    ("Faroe Islands", "2234"),
    ("Fiji", "2242"),
    ("Finland", "2246"),
    ("France", "2250"),
    ("French Guiana", "2254"),
    ("French Polynesia", "2258"),
    ("French Southern Territories", "2260"),
    ("Gabon", "2266"),
    ("Gambia", "2270"),
    ("Georgia", "2268"),
    ("Germany", "2276"),
    ("Ghana", "2288"),
    ("Gibraltar", "2292"),
    ("Greece", "2300"),
    ("Greenland", "2304"),
    ("Grenada", "2308"),
    ("Guadeloupe", "2312"),
    ("Guam", "2316"),
    ("Guatemala", "2320"),
    ("Guinea", "2324"),
    ("Guinea-Bissau", "2624"),
    ("Guyana", "2328"),
    ("Haiti", "2332"),
    ("Heard Island and McDonald Islands", "2334"),
    ("Honduras", "2340"),
    ("Hong Kong", "2344"),
    ("Hungary", "2348"),
    ("Iceland", "2352"),
    ("India", "2356"),
    ("Indonesia", "2360"),
    ("Iran", "2364"),
    ("Iraq", "2368"),
    ("Ireland", "2372"),
    ("Israel", "2376"),
    ("Italy", "2380"),
    ("Ivory Coast", "2384"),
    ("Jamaica", "2388"),
    ("Japan", "2392"),
    ("Jordan", "2400"),
    ("Kazakhstan", "2398"),
    ("Kenya", "2404"),
    ("Kiribati", "2296"),
    ("Kuwait", "2414"),
    ("Kyrgyzstan", "2417"),
    ("Laos", "2418"),
    ("Latvia", "2428"),
    ("Lebanon", "2422"),
    ("Lesotho", "2426"),
    ("Liberia", "2430"),
    ("Libya", "2434"),
    ("Liechtenstein", "2438"),
    ("Lithuania", "2440"),
    ("Luxembourg", "2442"),
    ("Macau", "2446"),
    ("Macedonia", "2807"),
    ("Madagascar", "2450"),
    ("Malawi", "2454"),
    ("Malaysia", "2458"),
    ("Maldives", "2462"),
    ("Mali", "2466"),
    ("Malta", "2470"),
    ("Marshall Islands", "2584"),
    ("Martinique", "2474"),
    ("Mauritania", "2478"),
    ("Mauritius", "2480"),
    ("Mayotte", "2175"),
    ("Mexico", "2484"),
    ("Micronesia", "2583"),
    ("Moldova", "2498"),
    ("Monaco", "2492"),
    ("Mongolia", "2496"),
    ("Montenegro", "2499"),
    ("Montserrat", "2500"),
    ("Morocco", "2504"),
    ("Mozambique", "2508"),
    ("Myanmar", "2104"),
    ("Namibia", "2516"),
    ("Nauru", "2520"),
    ("Nepal", "2524"),
    ("Netherlands", "2528"),
    ("Netherlands Antilles", "2530"),
    ("New Caledonia", "2540"),
    ("New Zealand", "2554"),
    ("Nicaragua", "2558"),
    ("Niger", "2562"),
    ("Nigeria", "2566"),
    ("Niue", "2570"),
    ("Norfolk Island", "2574"),
    ("North Korea", "2408"),
    ("Northern Mariana Islands", "2580"),
    ("Norway", "2578"),
    ("Oman", "2512"),
    ("Pakistan", "2586"),
    ("Palau", "2585"),
    ("Palestine", "2275"),
    ("Panama", "2591"),
    ("Papua New Guinea", "2598"),
    ("Paraguay", "2600"),
    ("Peru", "2604"),
    ("Philippines", "2608"),
    ("Pitcairn", "2612"),
    ("Poland", "2616"),
    ("Portugal", "2620"),
    ("Puerto Rico", "2630"),
    ("Qatar", "2634"),
    ("Reunion", "2638"),
    ("Romania", "2642"),
    ("Russia", "2643"),
    ("Rwanda", "2646"),
    ("Saint Helena", "2654"),
    ("Saint Kitts and Nevis", "2659"),
    ("Saint Lucia", "2662"),
    ("Saint Pierre and Miquelon", "2666"),
    ("Saint Vincent and the Grenadines", "2670"),
    ("Samoa", "2882"),
    ("San Marino", "2674"),
    ("Sao Tome and Principe", "2678"),
    ("Saudi Arabia", "2682"),
    ("Senegal", "2686"),
    ("Serbia", "2688"),
    ("Seychelles", "2690"),
    ("Sierra Leone", "2694"),
    ("Singapore", "2702"),
    ("Slovakia", "2703"),
    ("Slovenia", "2705"),
    ("Solomon Islands", "2090"),
    ("Somalia", "2706"),
    ("South Africa", "2710"),
    ("South Georgia and the South Sandwich Islands", "2239"),
    ("South Korea", "2410"),
    ("Spain", "2724"),
    ("Sri Lanka", "2144"),
    ("Sudan", "2736"),
    ("Suriname", "2740"),
    ("Svalbard and Jan Mayen", "2744"),
    ("Swaziland", "2748"),
    ("Sweden", "2752"),
    ("Switzerland", "2756"),
    ("Syria", "2760"),
    ("Taiwan", "2158"),
    ("Tajikistan", "2762"),
    ("Tanzania", "2834"),
    ("Thailand", "2764"),
    ("Togo", "2768"),
    ("Tokelau", "2772"),
    ("Tonga", "2776"),
    ("Trinidad and Tobago", "2780"),
    ("Tunisia", "2788"),
    ("Turkey", "2792"),
    ("Turkmenistan", "2795"),
    ("Turks and Caicos Islands", "2796"),
    ("Tuvalu", "2798"),
    ("Uganda", "2800"),
    ("Ukraine", "2804"),
    ("United Arab Emirates", "2784"),
    ("United Kingdom", "2826"),
    ("United States", "2840"),
    ("United States Minor Outlying Islands", "2581"),
    ("Uruguay", "2858"),
    ("Uzbekistan", "2860"),
    ("Vanuatu", "2548"),
    ("Vatican", "2336"),
    ("Venezuela", "2862"),
    ("Vietnam", "2704"),
    ("Virgin Islands, British", "2092"),
    ("Virgin Islands, U.S.", "2850"),
    ("Wallis and Futuna", "2876"),
    ("Western Sahara", "2732"),
    ("Yemen", "2887"),
    ("Zambia", "2894"),
    ("Zimbabwe", "2716"),
];
/// Resolve a location into a geo target constant ID.
///
/// `Location::All` resolves to `None` (no geo restriction). Numeric values are
/// passed through as IDs; anything else is looked up by country name,
/// case-insensitively.
///
/// # Errors
///
/// Returns [`KeywordsError::UnknownLocation`] if the name is not in
/// [`COUNTRY_GEO_TARGETS`].
pub fn resolve_geo_target(location: &Location) -> Result<Option<String>, KeywordsError> {
    match location {
        Location::All => Ok(None),
        Location::Named(raw) => {
            let name = raw.trim();
            if !name.is_empty() && name.chars().all(|c| c.is_ascii_digit()) {
                return Ok(Some(name.to_string()));
            }
            COUNTRY_GEO_TARGETS
                .iter()
                .find(|(country, _)| country.eq_ignore_ascii_case(name))
                .map(|(_, id)| Some((*id).to_string()))
                .ok_or_else(|| KeywordsError::UnknownLocation(name.to_string()))
        }
    }
}

/// Countries whose name contains `query`, case-insensitively.
#[must_use]
pub fn search_countries(query: &str) -> Vec<(&'static str, &'static str)> {
    let needle = query.trim().to_lowercase();
    COUNTRY_GEO_TARGETS
        .iter()
        .filter(|(country, _)| needle.is_empty() || country.to_lowercase().contains(&needle))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_no_geo_target() {
        assert_eq!(resolve_geo_target(&Location::All).unwrap(), None);
    }

    #[test]
    fn resolves_country_name_case_insensitively() {
        let id = resolve_geo_target(&Location::Named("united states".to_string())).unwrap();
        assert_eq!(id.as_deref(), Some("2840"));
        let id = resolve_geo_target(&Location::Named("Czech Republic".to_string())).unwrap();
        assert_eq!(id.as_deref(), Some("2203"));
    }

    #[test]
    fn numeric_location_passes_through() {
        let id = resolve_geo_target(&Location::Named("21137".to_string())).unwrap();
        assert_eq!(id.as_deref(), Some("21137"));
    }

    #[test]
    fn unknown_country_is_an_error() {
        let err = resolve_geo_target(&Location::Named("Atlantis".to_string())).unwrap_err();
        assert!(matches!(err, KeywordsError::UnknownLocation(ref n) if n == "Atlantis"));
    }

    #[test]
    fn table_is_sorted_and_unique() {
        let names: Vec<&str> = COUNTRY_GEO_TARGETS.iter().map(|(n, _)| *n).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn search_matches_substring() {
        let hits = search_countries("kingdom");
        assert!(hits.contains(&("United Kingdom", "2826")));
        assert!(hits.iter().all(|(n, _)| n.to_lowercase().contains("kingdom")));
    }

    #[test]
    fn empty_search_lists_everything() {
        assert_eq!(search_countries("").len(), COUNTRY_GEO_TARGETS.len());
    }
}
