//! Built-in destination cities: canonical search name, localized aliases, centroid.

pub(super) struct BuiltinCity {
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub lat: f64,
    pub lon: f64,
}

pub(super) const BUILTIN_CITIES: &[BuiltinCity] = &[
    // Japan
    BuiltinCity {
        canonical: "Tokyo",
        aliases: &["도쿄", "동경", "東京"],
        lat: 35.6762,
        lon: 139.6503,
    },
    BuiltinCity {
        canonical: "Osaka",
        aliases: &["오사카", "大阪"],
        lat: 34.6937,
        lon: 135.5023,
    },
    BuiltinCity {
        canonical: "Kyoto",
        aliases: &["교토", "京都"],
        lat: 35.0116,
        lon: 135.7681,
    },
    BuiltinCity {
        canonical: "Fukuoka",
        aliases: &["후쿠오카", "福岡"],
        lat: 33.5904,
        lon: 130.4017,
    },
    BuiltinCity {
        canonical: "Sapporo",
        aliases: &["삿포로", "札幌"],
        lat: 43.0618,
        lon: 141.3545,
    },
    BuiltinCity {
        canonical: "Okinawa",
        aliases: &["오키나와", "沖縄"],
        lat: 26.2124,
        lon: 127.6809,
    },
    BuiltinCity {
        canonical: "Nagoya",
        aliases: &["나고야", "名古屋"],
        lat: 35.1815,
        lon: 136.9066,
    },
    // Korea
    BuiltinCity {
        canonical: "Seoul",
        aliases: &["서울"],
        lat: 37.5665,
        lon: 126.9780,
    },
    BuiltinCity {
        canonical: "Busan",
        aliases: &["부산"],
        lat: 35.1796,
        lon: 129.0756,
    },
    BuiltinCity {
        canonical: "Jeju",
        aliases: &["제주", "제주도"],
        lat: 33.4996,
        lon: 126.5312,
    },
    // Greater China
    BuiltinCity {
        canonical: "Taipei",
        aliases: &["타이베이", "타이페이", "台北"],
        lat: 25.0330,
        lon: 121.5654,
    },
    BuiltinCity {
        canonical: "Hong Kong",
        aliases: &["홍콩", "香港"],
        lat: 22.3193,
        lon: 114.1694,
    },
    BuiltinCity {
        canonical: "Shanghai",
        aliases: &["상하이", "上海"],
        lat: 31.2304,
        lon: 121.4737,
    },
    BuiltinCity {
        canonical: "Beijing",
        aliases: &["베이징", "북경", "北京"],
        lat: 39.9042,
        lon: 116.4074,
    },
    // Southeast Asia
    BuiltinCity {
        canonical: "Bangkok",
        aliases: &["방콕"],
        lat: 13.7563,
        lon: 100.5018,
    },
    BuiltinCity {
        canonical: "Singapore",
        aliases: &["싱가포르", "싱가폴"],
        lat: 1.3521,
        lon: 103.8198,
    },
    BuiltinCity {
        canonical: "Da Nang",
        aliases: &["다낭"],
        lat: 16.0544,
        lon: 108.2022,
    },
    BuiltinCity {
        canonical: "Hanoi",
        aliases: &["하노이"],
        lat: 21.0278,
        lon: 105.8342,
    },
    BuiltinCity {
        canonical: "Ho Chi Minh City",
        aliases: &["호치민", "호찌민"],
        lat: 10.8231,
        lon: 106.6297,
    },
    BuiltinCity {
        canonical: "Nha Trang",
        aliases: &["나트랑", "냐짱"],
        lat: 12.2388,
        lon: 109.1967,
    },
    BuiltinCity {
        canonical: "Cebu",
        aliases: &["세부"],
        lat: 10.3157,
        lon: 123.8854,
    },
    BuiltinCity {
        canonical: "Bali",
        aliases: &["발리"],
        lat: -8.3405,
        lon: 115.0920,
    },
    BuiltinCity {
        canonical: "Kuala Lumpur",
        aliases: &["쿠알라룸푸르"],
        lat: 3.1390,
        lon: 101.6869,
    },
    BuiltinCity {
        canonical: "Guam",
        aliases: &["괌"],
        lat: 13.4443,
        lon: 144.7937,
    },
    // Europe
    BuiltinCity {
        canonical: "Paris",
        aliases: &["파리"],
        lat: 48.8566,
        lon: 2.3522,
    },
    BuiltinCity {
        canonical: "London",
        aliases: &["런던"],
        lat: 51.5074,
        lon: -0.1278,
    },
    BuiltinCity {
        canonical: "Rome",
        aliases: &["로마"],
        lat: 41.9028,
        lon: 12.4964,
    },
    BuiltinCity {
        canonical: "Barcelona",
        aliases: &["바르셀로나"],
        lat: 41.3874,
        lon: 2.1686,
    },
    BuiltinCity {
        canonical: "Prague",
        aliases: &["프라하"],
        lat: 50.0755,
        lon: 14.4378,
    },
    // Americas / Oceania
    BuiltinCity {
        canonical: "New York",
        aliases: &["뉴욕"],
        lat: 40.7128,
        lon: -74.0060,
    },
    BuiltinCity {
        canonical: "Los Angeles",
        aliases: &["로스앤젤레스", "엘에이"],
        lat: 34.0522,
        lon: -118.2437,
    },
    BuiltinCity {
        canonical: "Sydney",
        aliases: &["시드니"],
        lat: -33.8688,
        lon: 151.2093,
    },
];
