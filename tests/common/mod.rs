//! Moscow test network shared by the integration tests.
//!
//! ```text
//!                          line2              line4                         line3
//!                           |                  |                             |
//! line1 _ Аэропорт _ _ _ Динамо _ _ _  Белорусская _ _ _ Маяковская _ _ _ Тверская _ line1
//!                     Петровский       Белорусская                    Пушкинская
//!                        парк                 \                          /
//!                           \                  \                       /
//!                            \                  \                 Баррикадная
//!                             \                  \__ __ __ Краснопресенская _ line4
//!                            ЦСКА                                 /
//!                               \                               /
//!                                \                      Улица 1905 года
//!                                 \                         /
//!                              Хорошевская                 /
//!  line3 _ Октябрьское поле _ _ _ Полежаевская _ _ _ Беговая
//!                                     \
//!                                  Шелепиха
//!                                      |
//!                                    line2
//! ```

use metro_router::{LineId, StationId, StationIndex};

const LINES: [(u32, &str); 5] = [
    (1, "Зеленая"),
    (2, "Желтая"),
    (3, "Фиолетовая"),
    (4, "Кольцевая"),
    (5, "Тестовая"),
];

const STATIONS: [(&str, u32); 17] = [
    ("Аэропорт", 1),
    ("Динамо", 1),
    ("Белорусская", 1),
    ("Маяковская", 1),
    ("Тверская", 1),
    ("Петровский парк", 2),
    ("ЦСКА", 2),
    ("Хорошевская", 2),
    ("Шелепиха", 2),
    ("Октябрьское поле", 3),
    ("Полежаевская", 3),
    ("Беговая", 3),
    ("Улица 1905 года", 3),
    ("Баррикадная", 3),
    ("Пушкинская", 3),
    ("Краснопресенская", 4),
    ("Белорусская", 4),
];

pub fn moscow() -> StationIndex {
    let mut index = StationIndex::new();

    for (id, name) in LINES {
        index.add_line(LineId::new(id), name);
    }
    for (name, line) in STATIONS {
        index.add_station(name, LineId::new(line)).unwrap();
    }

    let pairs = [
        (station(&index, "Динамо"), station(&index, "Петровский парк")),
        (station(&index, "Полежаевская"), station(&index, "Хорошевская")),
        (
            station(&index, "Белорусская"),
            index.station_on_line("Белорусская", LineId::new(4)).unwrap(),
        ),
        (station(&index, "Баррикадная"), station(&index, "Краснопресенская")),
        (station(&index, "Пушкинская"), station(&index, "Тверская")),
    ];
    for (a, b) in pairs {
        index.add_connection(a, b).unwrap();
    }

    index
}

pub fn station(index: &StationIndex, name: &str) -> StationId {
    index.station(name).unwrap()
}

pub fn stations(index: &StationIndex, names: &[&str]) -> Vec<StationId> {
    names.iter().map(|n| station(index, n)).collect()
}
