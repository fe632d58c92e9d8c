// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Static place-name tables. Keys are already normalized (trimmed, lowercase,
//! single spaces).

/// City names, local spellings and common aliases → serving airport.
pub(crate) fn city_airport(key: &str) -> Option<&'static str> {
    let code = match key {
        // India
        "delhi" | "new delhi" => "DEL",
        "mumbai" | "bombay" => "BOM",
        "bangalore" | "bengaluru" => "BLR",
        "chennai" => "MAA",
        "kolkata" | "calcutta" => "CCU",
        "hyderabad" => "HYD",
        "pune" => "PNQ",
        "ahmedabad" => "AMD",
        "jaipur" => "JAI",
        "lucknow" => "LKO",
        "goa" => "GOI",
        "cochin" | "kochi" => "COK",
        "trivandrum" | "thiruvananthapuram" => "TRV",
        // United States
        "new york" | "new york city" | "nyc" => "JFK",
        "los angeles" | "la" => "LAX",
        "chicago" => "ORD",
        "san francisco" => "SFO",
        "boston" => "BOS",
        "washington" | "washington dc" => "DCA",
        "miami" => "MIA",
        "seattle" => "SEA",
        "las vegas" => "LAS",
        "orlando" => "MCO",
        "atlanta" => "ATL",
        "dallas" => "DFW",
        "houston" => "IAH",
        "philadelphia" => "PHL",
        "phoenix" => "PHX",
        "denver" => "DEN",
        "detroit" => "DTW",
        "minneapolis" => "MSP",
        // United Kingdom
        "london" => "LHR",
        "manchester" => "MAN",
        "birmingham" => "BHX",
        "glasgow" => "GLA",
        "edinburgh" => "EDI",
        // Europe
        "paris" => "CDG",
        "berlin" => "BER",
        "munich" => "MUC",
        "frankfurt" => "FRA",
        "rome" => "FCO",
        "milan" => "MXP",
        "venice" => "VCE",
        "madrid" => "MAD",
        "barcelona" => "BCN",
        "amsterdam" => "AMS",
        "brussels" => "BRU",
        "zurich" => "ZRH",
        "geneva" => "GVA",
        "vienna" => "VIE",
        "prague" => "PRG",
        "dublin" => "DUB",
        "lisbon" => "LIS",
        "athens" => "ATH",
        "istanbul" => "IST",
        "stockholm" => "ARN",
        "copenhagen" => "CPH",
        "oslo" => "OSL",
        "helsinki" => "HEL",
        "warsaw" => "WAW",
        // Middle East
        "dubai" => "DXB",
        "abu dhabi" => "AUH",
        "doha" => "DOH",
        "riyadh" => "RUH",
        "jeddah" => "JED",
        "tel aviv" => "TLV",
        "cairo" => "CAI",
        // Asia
        "singapore" => "SIN",
        "tokyo" => "NRT",
        "osaka" => "KIX",
        "beijing" => "PEK",
        "shanghai" => "PVG",
        "hong kong" => "HKG",
        "taipei" => "TPE",
        "seoul" => "ICN",
        "bangkok" => "BKK",
        "kuala lumpur" => "KUL",
        "jakarta" => "CGK",
        "bali" => "DPS",
        "manila" => "MNL",
        "ho chi minh" => "SGN",
        "hanoi" => "HAN",
        // Oceania
        "sydney" => "SYD",
        "melbourne" => "MEL",
        "brisbane" => "BNE",
        "perth" => "PER",
        "auckland" => "AKL",
        // South America
        "sao paulo" => "GRU",
        "rio de janeiro" => "GIG",
        "buenos aires" => "EZE",
        "santiago" => "SCL",
        "lima" => "LIM",
        "bogota" => "BOG",
        // Canada
        "toronto" => "YYZ",
        "vancouver" => "YVR",
        "montreal" => "YUL",
        "calgary" => "YYC",
        // Africa
        "johannesburg" => "JNB",
        "cape town" => "CPT",
        "nairobi" => "NBO",
        "lagos" => "LOS",
        "casablanca" => "CMN",
        _ => return None,
    };
    Some(code)
}

/// Country names → one representative hub. Lossy: "japan" always means
/// Narita, never Haneda or Kansai.
pub(crate) fn country_hub(key: &str) -> Option<&'static str> {
    let code = match key {
        "india" => "DEL",
        "united states" | "usa" | "america" => "JFK",
        "uk" | "united kingdom" | "england" => "LHR",
        "france" => "CDG",
        "germany" => "FRA",
        "italy" => "FCO",
        "spain" => "MAD",
        "netherlands" | "holland" => "AMS",
        "belgium" => "BRU",
        "switzerland" => "ZRH",
        "austria" => "VIE",
        "czech republic" => "PRG",
        "ireland" => "DUB",
        "portugal" => "LIS",
        "greece" => "ATH",
        "turkey" => "IST",
        "sweden" => "ARN",
        "denmark" => "CPH",
        "norway" => "OSL",
        "finland" => "HEL",
        "poland" => "WAW",
        "uae" | "united arab emirates" => "DXB",
        "qatar" => "DOH",
        "saudi arabia" => "RUH",
        "israel" => "TLV",
        "egypt" => "CAI",
        "japan" => "NRT",
        "china" => "PEK",
        "taiwan" => "TPE",
        "south korea" | "korea" => "ICN",
        "thailand" => "BKK",
        "malaysia" => "KUL",
        "indonesia" => "CGK",
        "philippines" => "MNL",
        "vietnam" => "HAN",
        "australia" => "SYD",
        "new zealand" => "AKL",
        "brazil" => "GRU",
        "argentina" => "EZE",
        "chile" => "SCL",
        "peru" => "LIM",
        "colombia" => "BOG",
        "canada" => "YYZ",
        "south africa" => "JNB",
        "kenya" => "NBO",
        "nigeria" => "LOS",
        "morocco" => "CMN",
        _ => return None,
    };
    Some(code)
}
