use lit_time::MonthDay;

use super::FeastKind::{self, Commemoration, Festival, LesserFestival, PrincipalFeast};
use super::{FeastDef, FixedFeast};
use crate::colour::Colour;

const fn fixed(
    month: u8,
    day: u8,
    name: &'static str,
    kind: FeastKind,
    martyr: bool,
    readings: &'static [&'static str],
) -> FixedFeast {
    FixedFeast {
        date: MonthDay::new_unchecked(month, day),
        feast: FeastDef { name, kind, colour: None, martyr, readings },
    }
}

const fn coloured(mut feast: FixedFeast, colour: Colour) -> FixedFeast {
    feast.feast.colour = Some(colour);
    feast
}

/// Feasts on fixed calendar dates.
pub static FIXED_FEASTS: &[FixedFeast] = &[
    // Principal Feasts
    fixed(
        12,
        25,
        "Christmas Day",
        PrincipalFeast,
        false,
        &["Isaiah 52:7-10", "Hebrews 1:1-4", "John 1:1-14", "Psalm 98"],
    ),
    fixed(
        1,
        6,
        "The Epiphany",
        PrincipalFeast,
        false,
        &["Isaiah 60:1-6", "Ephesians 3:1-12", "Matthew 2:1-12", "Psalm 72:1-7,10-14"],
    ),
    fixed(
        2,
        2,
        "Presentation of Christ in the Temple",
        PrincipalFeast,
        false,
        &["Malachi 3:1-5", "Hebrews 2:14-18", "Luke 2:22-40", "Psalm 24:7-10"],
    ),
    fixed(
        3,
        25,
        "Annunciation of Our Lord to the Blessed Virgin Mary",
        PrincipalFeast,
        false,
        &["Isaiah 7:10-14", "Hebrews 10:4-10", "Luke 1:26-38", "Psalm 40:5-10"],
    ),
    fixed(
        11,
        1,
        "All Saints' Day",
        PrincipalFeast,
        false,
        &["Revelation 7:9-17", "1 John 3:1-3", "Matthew 5:1-12", "Psalm 34:1-10"],
    ),
    // Festivals
    fixed(
        1,
        1,
        "Naming and Circumcision of Jesus",
        Festival,
        false,
        &["Numbers 6:22-27", "Galatians 4:4-7", "Luke 2:15-21", "Psalm 8"],
    ),
    fixed(1, 25, "Conversion of Paul", Festival, false, &[]),
    fixed(3, 19, "Joseph of Nazareth", Festival, false, &[]),
    fixed(4, 25, "Mark the Evangelist", Festival, true, &[]),
    fixed(5, 1, "Philip and James, Apostles", Festival, true, &[]),
    fixed(5, 14, "Matthias the Apostle", Festival, true, &[]),
    fixed(5, 31, "Visit of the Blessed Virgin Mary to Elizabeth", Festival, false, &[]),
    fixed(
        6,
        11,
        "Barnabas the Apostle",
        Festival,
        true,
        &["Job 29:11-16", "Acts 11:19-30", "John 15:12-17", "Psalm 112"],
    ),
    fixed(6, 24, "Birth of John the Baptist", Festival, false, &[]),
    fixed(6, 29, "Peter and Paul, Apostles", Festival, true, &[]),
    fixed(7, 3, "Thomas the Apostle", Festival, true, &[]),
    fixed(7, 22, "Mary Magdalene", Festival, false, &[]),
    fixed(7, 25, "James the Apostle", Festival, true, &[]),
    fixed(8, 6, "The Transfiguration of Our Lord", Festival, false, &[]),
    fixed(8, 15, "The Blessed Virgin Mary", Festival, false, &[]),
    fixed(8, 24, "Bartholomew the Apostle", Festival, true, &[]),
    coloured(fixed(9, 14, "Holy Cross Day", Festival, false, &[]), Colour::Red),
    fixed(9, 21, "Matthew, Apostle and Evangelist", Festival, true, &[]),
    fixed(9, 29, "Michael and All Angels", Festival, false, &[]),
    fixed(10, 18, "Luke the Evangelist", Festival, true, &[]),
    fixed(10, 28, "Simon and Jude, Apostles", Festival, true, &[]),
    fixed(11, 30, "Andrew the Apostle", Festival, true, &[]),
    fixed(
        12,
        26,
        "Stephen, Deacon, First Martyr",
        Festival,
        true,
        &["2 Chronicles 24:20-22", "Acts 7:51-60", "Matthew 10:17-22", "Psalm 119:161-168"],
    ),
    fixed(
        12,
        27,
        "John, Apostle and Evangelist",
        Festival,
        false,
        &["Exodus 33:7-11a", "1 John 1:1-10", "John 21:19b-25", "Psalm 117"],
    ),
    fixed(
        12,
        28,
        "The Holy Innocents",
        Festival,
        true,
        &["Jeremiah 31:15-17", "1 Corinthians 1:26-29", "Matthew 2:13-18", "Psalm 124"],
    ),
    // Lesser Festivals
    fixed(1, 17, "Antony of Egypt", LesserFestival, false, &[]),
    fixed(2, 14, "Cyril and Methodius", LesserFestival, false, &[]),
    fixed(3, 1, "David of Wales", LesserFestival, false, &[]),
    fixed(4, 21, "Anselm", LesserFestival, false, &[]),
    fixed(5, 8, "Julian of Norwich", LesserFestival, false, &[]),
    fixed(5, 24, "John and Charles Wesley", LesserFestival, false, &[]),
    fixed(5, 26, "Augustine of Canterbury", LesserFestival, false, &[]),
    fixed(6, 1, "Justin, Martyr", LesserFestival, true, &[]),
    fixed(7, 11, "Benedict of Nursia", LesserFestival, false, &[]),
    fixed(7, 29, "Mary, Martha and Lazarus", LesserFestival, false, &[]),
    fixed(8, 20, "Bernard", LesserFestival, false, &[]),
    fixed(9, 16, "Ninian", LesserFestival, false, &[]),
    fixed(10, 4, "Francis of Assisi", LesserFestival, false, &[]),
    coloured(
        fixed(11, 2, "Commemoration of the Faithful Departed", LesserFestival, false, &[]),
        Colour::Purple,
    ),
    fixed(11, 3, "Richard Hooker", LesserFestival, false, &[]),
    fixed(11, 11, "Martin of Tours", LesserFestival, false, &[]),
    fixed(12, 29, "Thomas Becket", LesserFestival, true, &[]),
    // Commemorations
    fixed(1, 30, "Charles, King and Martyr", Commemoration, true, &[]),
    fixed(7, 6, "Thomas More", Commemoration, false, &[]),
    fixed(10, 31, "Martin Luther", Commemoration, false, &[]),
    fixed(12, 31, "John Wyclif", Commemoration, false, &[]),
];
