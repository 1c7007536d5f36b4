//! Seasonal weekday propers keyed by the reading key of the week.
//!
//! Advent, Lent, Holy Week and Eastertide share one set of readings in both
//! weekday cycles.  The weeks outside the seasons come from
//! [`ORDINARY_WEEKS`](super::ORDINARY_WEEKS).

use lit_time::Weekday;

use super::WeekdayPropers;

/// Weekday readings keyed by `(week key, weekday, cycle)`.
pub static WEEKDAY_READINGS: &[WeekdayPropers] = &[
    // ── Advent ──────────────────────────────────────────────────────────────────
    WeekdayPropers {
        key: "Advent 1",
        day: Weekday::Monday,
        cycle: None,
        readings: ["Isaiah 2:1-5", "Matthew 8:5-11"],
    },
    WeekdayPropers {
        key: "Advent 1",
        day: Weekday::Tuesday,
        cycle: None,
        readings: ["Isaiah 11:1-10", "Luke 10:21-24"],
    },
    WeekdayPropers {
        key: "Advent 1",
        day: Weekday::Wednesday,
        cycle: None,
        readings: ["Isaiah 25:6-10a", "Matthew 15:29-37"],
    },
    WeekdayPropers {
        key: "Advent 1",
        day: Weekday::Thursday,
        cycle: None,
        readings: ["Isaiah 26:1-6", "Matthew 7:21,24-27"],
    },
    WeekdayPropers {
        key: "Advent 1",
        day: Weekday::Friday,
        cycle: None,
        readings: ["Isaiah 29:17-24", "Matthew 9:27-31"],
    },
    WeekdayPropers {
        key: "Advent 1",
        day: Weekday::Saturday,
        cycle: None,
        readings: ["Isaiah 30:19-21,23-26", "Matthew 9:35-10:1,6-8"],
    },
    WeekdayPropers {
        key: "Advent 2",
        day: Weekday::Monday,
        cycle: None,
        readings: ["Isaiah 35:1-10", "Luke 5:17-26"],
    },
    WeekdayPropers {
        key: "Advent 2",
        day: Weekday::Tuesday,
        cycle: None,
        readings: ["Isaiah 40:1-11", "Matthew 18:12-14"],
    },
    WeekdayPropers {
        key: "Advent 2",
        day: Weekday::Wednesday,
        cycle: None,
        readings: ["Isaiah 40:25-31", "Matthew 11:28-30"],
    },
    WeekdayPropers {
        key: "Advent 2",
        day: Weekday::Thursday,
        cycle: None,
        readings: ["Isaiah 41:13-20", "Matthew 11:11-15"],
    },
    WeekdayPropers {
        key: "Advent 2",
        day: Weekday::Friday,
        cycle: None,
        readings: ["Isaiah 48:17-19", "Matthew 11:16-19"],
    },
    WeekdayPropers {
        key: "Advent 2",
        day: Weekday::Saturday,
        cycle: None,
        readings: ["Ecclesiasticus 48:1-4,9-11", "Matthew 17:10-13"],
    },
    WeekdayPropers {
        key: "Advent 3",
        day: Weekday::Monday,
        cycle: None,
        readings: ["Numbers 24:2-7,15-17a", "Matthew 21:23-27"],
    },
    WeekdayPropers {
        key: "Advent 3",
        day: Weekday::Tuesday,
        cycle: None,
        readings: ["Zephaniah 3:1-2,9-13", "Matthew 21:28-32"],
    },
    WeekdayPropers {
        key: "Advent 3",
        day: Weekday::Wednesday,
        cycle: None,
        readings: ["Isaiah 45:6b-8,18,21b-25", "Luke 7:18b-23"],
    },
    WeekdayPropers {
        key: "Advent 3",
        day: Weekday::Thursday,
        cycle: None,
        readings: ["Isaiah 54:1-10", "Luke 7:24-30"],
    },
    WeekdayPropers {
        key: "Advent 3",
        day: Weekday::Friday,
        cycle: None,
        readings: ["Isaiah 56:1-3a,6-8", "John 5:33-36"],
    },
    // ── Ash Wednesday and the days after ────────────────────────────────────────
    WeekdayPropers {
        key: "1 before Lent",
        day: Weekday::Wednesday,
        cycle: None,
        readings: ["Joel 2:1-2,12-17", "Matthew 6:1-6,16-21"],
    },
    WeekdayPropers {
        key: "1 before Lent",
        day: Weekday::Thursday,
        cycle: None,
        readings: ["Deuteronomy 30:15-20", "Luke 9:22-25"],
    },
    WeekdayPropers {
        key: "1 before Lent",
        day: Weekday::Friday,
        cycle: None,
        readings: ["Isaiah 58:1-9a", "Matthew 9:14-15"],
    },
    WeekdayPropers {
        key: "1 before Lent",
        day: Weekday::Saturday,
        cycle: None,
        readings: ["Isaiah 58:9b-14", "Luke 5:27-32"],
    },
    // ── Lent ────────────────────────────────────────────────────────────────────
    WeekdayPropers {
        key: "Lent 1",
        day: Weekday::Monday,
        cycle: None,
        readings: ["Leviticus 19:1-2,11-18", "Matthew 25:31-46"],
    },
    WeekdayPropers {
        key: "Lent 1",
        day: Weekday::Tuesday,
        cycle: None,
        readings: ["Isaiah 55:10-11", "Matthew 6:7-15"],
    },
    WeekdayPropers {
        key: "Lent 1",
        day: Weekday::Wednesday,
        cycle: None,
        readings: ["Jonah 3:1-10", "Luke 11:29-32"],
    },
    WeekdayPropers {
        key: "Lent 1",
        day: Weekday::Thursday,
        cycle: None,
        readings: ["Esther 14:1,3-5,12-14", "Matthew 7:7-12"],
    },
    WeekdayPropers {
        key: "Lent 1",
        day: Weekday::Friday,
        cycle: None,
        readings: ["Ezekiel 18:21-28", "Matthew 5:20-26"],
    },
    WeekdayPropers {
        key: "Lent 1",
        day: Weekday::Saturday,
        cycle: None,
        readings: ["Deuteronomy 26:16-19", "Matthew 5:43-48"],
    },
    WeekdayPropers {
        key: "Lent 2",
        day: Weekday::Monday,
        cycle: None,
        readings: ["Daniel 9:4b-10", "Luke 6:36-38"],
    },
    WeekdayPropers {
        key: "Lent 2",
        day: Weekday::Tuesday,
        cycle: None,
        readings: ["Isaiah 1:10,16-20", "Matthew 23:1-12"],
    },
    WeekdayPropers {
        key: "Lent 2",
        day: Weekday::Wednesday,
        cycle: None,
        readings: ["Jeremiah 18:18-20", "Matthew 20:17-28"],
    },
    WeekdayPropers {
        key: "Lent 2",
        day: Weekday::Thursday,
        cycle: None,
        readings: ["Jeremiah 17:5-10", "Luke 16:19-31"],
    },
    WeekdayPropers {
        key: "Lent 2",
        day: Weekday::Friday,
        cycle: None,
        readings: ["Genesis 37:3-4,12-13a,17b-28", "Matthew 21:33-43,45-46"],
    },
    WeekdayPropers {
        key: "Lent 2",
        day: Weekday::Saturday,
        cycle: None,
        readings: ["Micah 7:14-15,18-20", "Luke 15:1-3,11-32"],
    },
    WeekdayPropers {
        key: "Lent 3",
        day: Weekday::Monday,
        cycle: None,
        readings: ["2 Kings 5:1-15a", "Luke 4:24-30"],
    },
    WeekdayPropers {
        key: "Lent 3",
        day: Weekday::Tuesday,
        cycle: None,
        readings: ["Song of the Three 2,11-20", "Matthew 18:21-35"],
    },
    WeekdayPropers {
        key: "Lent 3",
        day: Weekday::Wednesday,
        cycle: None,
        readings: ["Deuteronomy 4:1,5-9", "Matthew 5:17-19"],
    },
    WeekdayPropers {
        key: "Lent 3",
        day: Weekday::Thursday,
        cycle: None,
        readings: ["Jeremiah 7:23-28", "Luke 11:14-23"],
    },
    WeekdayPropers {
        key: "Lent 3",
        day: Weekday::Friday,
        cycle: None,
        readings: ["Hosea 14:1-9", "Mark 12:28b-34"],
    },
    WeekdayPropers {
        key: "Lent 3",
        day: Weekday::Saturday,
        cycle: None,
        readings: ["Hosea 6:1-6", "Luke 18:9-14"],
    },
    WeekdayPropers {
        key: "Lent 4",
        day: Weekday::Monday,
        cycle: None,
        readings: ["Isaiah 65:17-21", "John 4:43-54"],
    },
    WeekdayPropers {
        key: "Lent 4",
        day: Weekday::Tuesday,
        cycle: None,
        readings: ["Ezekiel 47:1-9,12", "John 5:1-16"],
    },
    WeekdayPropers {
        key: "Lent 4",
        day: Weekday::Wednesday,
        cycle: None,
        readings: ["Isaiah 49:8-15", "John 5:17-30"],
    },
    WeekdayPropers {
        key: "Lent 4",
        day: Weekday::Thursday,
        cycle: None,
        readings: ["Exodus 32:7-14", "John 5:31-47"],
    },
    WeekdayPropers {
        key: "Lent 4",
        day: Weekday::Friday,
        cycle: None,
        readings: ["Wisdom 2:1a,12-22", "John 7:1-2,10,25-30"],
    },
    WeekdayPropers {
        key: "Lent 4",
        day: Weekday::Saturday,
        cycle: None,
        readings: ["Jeremiah 11:18-20", "John 7:40-53"],
    },
    WeekdayPropers {
        key: "Lent 5",
        day: Weekday::Monday,
        cycle: None,
        readings: ["Susanna 1-62", "John 8:1-11"],
    },
    WeekdayPropers {
        key: "Lent 5",
        day: Weekday::Tuesday,
        cycle: None,
        readings: ["Numbers 21:4-9", "John 8:21-30"],
    },
    WeekdayPropers {
        key: "Lent 5",
        day: Weekday::Wednesday,
        cycle: None,
        readings: ["Daniel 3:14-20,24-25,28", "John 8:31-42"],
    },
    WeekdayPropers {
        key: "Lent 5",
        day: Weekday::Thursday,
        cycle: None,
        readings: ["Genesis 17:3-9", "John 8:51-59"],
    },
    WeekdayPropers {
        key: "Lent 5",
        day: Weekday::Friday,
        cycle: None,
        readings: ["Jeremiah 20:10-13", "John 10:31-42"],
    },
    WeekdayPropers {
        key: "Lent 5",
        day: Weekday::Saturday,
        cycle: None,
        readings: ["Ezekiel 37:21-28", "John 11:45-56"],
    },
    // ── Holy Week ───────────────────────────────────────────────────────────────
    WeekdayPropers {
        key: "Holy Week",
        day: Weekday::Monday,
        cycle: None,
        readings: ["Isaiah 42:1-9", "John 12:1-11"],
    },
    WeekdayPropers {
        key: "Holy Week",
        day: Weekday::Tuesday,
        cycle: None,
        readings: ["Isaiah 49:1-7", "John 12:20-36"],
    },
    WeekdayPropers {
        key: "Holy Week",
        day: Weekday::Wednesday,
        cycle: None,
        readings: ["Isaiah 50:4-9a", "John 13:21-32"],
    },
    WeekdayPropers {
        key: "Holy Week",
        day: Weekday::Thursday,
        cycle: None,
        readings: ["Exodus 12:1-14", "John 13:1-17,31b-35"],
    },
    WeekdayPropers {
        key: "Holy Week",
        day: Weekday::Friday,
        cycle: None,
        readings: ["Isaiah 52:13-53:12", "John 18:1-19:42"],
    },
    WeekdayPropers {
        key: "Holy Week",
        day: Weekday::Saturday,
        cycle: None,
        readings: ["Lamentations 3:1-9,19-24", "John 19:38-42"],
    },
    // ── Easter ──────────────────────────────────────────────────────────────────
    WeekdayPropers {
        key: "Easter 1",
        day: Weekday::Monday,
        cycle: None,
        readings: ["Acts 2:14,22-32", "Matthew 28:8-15"],
    },
    WeekdayPropers {
        key: "Easter 1",
        day: Weekday::Tuesday,
        cycle: None,
        readings: ["Acts 2:36-41", "John 20:11-18"],
    },
    WeekdayPropers {
        key: "Easter 1",
        day: Weekday::Wednesday,
        cycle: None,
        readings: ["Acts 3:1-10", "Luke 24:13-35"],
    },
    WeekdayPropers {
        key: "Easter 1",
        day: Weekday::Thursday,
        cycle: None,
        readings: ["Acts 3:11-26", "Luke 24:35-48"],
    },
    WeekdayPropers {
        key: "Easter 1",
        day: Weekday::Friday,
        cycle: None,
        readings: ["Acts 4:1-12", "John 21:1-14"],
    },
    WeekdayPropers {
        key: "Easter 1",
        day: Weekday::Saturday,
        cycle: None,
        readings: ["Acts 4:13-21", "Mark 16:9-15"],
    },
    WeekdayPropers {
        key: "Easter 2",
        day: Weekday::Monday,
        cycle: None,
        readings: ["Acts 4:23-31", "John 3:1-8"],
    },
    WeekdayPropers {
        key: "Easter 2",
        day: Weekday::Tuesday,
        cycle: None,
        readings: ["Acts 4:32-37", "John 3:7-15"],
    },
    WeekdayPropers {
        key: "Easter 2",
        day: Weekday::Wednesday,
        cycle: None,
        readings: ["Acts 5:17-26", "John 3:16-21"],
    },
    WeekdayPropers {
        key: "Easter 2",
        day: Weekday::Thursday,
        cycle: None,
        readings: ["Acts 5:27-33", "John 3:31-36"],
    },
    WeekdayPropers {
        key: "Easter 2",
        day: Weekday::Friday,
        cycle: None,
        readings: ["Acts 5:34-42", "John 6:1-15"],
    },
    WeekdayPropers {
        key: "Easter 2",
        day: Weekday::Saturday,
        cycle: None,
        readings: ["Acts 6:1-7", "John 6:16-21"],
    },
    WeekdayPropers {
        key: "Easter 3",
        day: Weekday::Monday,
        cycle: None,
        readings: ["Acts 6:8-15", "John 6:22-29"],
    },
    WeekdayPropers {
        key: "Easter 3",
        day: Weekday::Tuesday,
        cycle: None,
        readings: ["Acts 7:51-8:1a", "John 6:30-35"],
    },
    WeekdayPropers {
        key: "Easter 3",
        day: Weekday::Wednesday,
        cycle: None,
        readings: ["Acts 8:1b-8", "John 6:35-40"],
    },
    WeekdayPropers {
        key: "Easter 3",
        day: Weekday::Thursday,
        cycle: None,
        readings: ["Acts 8:26-40", "John 6:44-51"],
    },
    WeekdayPropers {
        key: "Easter 3",
        day: Weekday::Friday,
        cycle: None,
        readings: ["Acts 9:1-20", "John 6:52-59"],
    },
    WeekdayPropers {
        key: "Easter 3",
        day: Weekday::Saturday,
        cycle: None,
        readings: ["Acts 9:31-42", "John 6:60-69"],
    },
    WeekdayPropers {
        key: "Easter 4",
        day: Weekday::Monday,
        cycle: None,
        readings: ["Acts 11:1-18", "John 10:1-10"],
    },
    WeekdayPropers {
        key: "Easter 4",
        day: Weekday::Tuesday,
        cycle: None,
        readings: ["Acts 11:19-26", "John 10:22-30"],
    },
    WeekdayPropers {
        key: "Easter 4",
        day: Weekday::Wednesday,
        cycle: None,
        readings: ["Acts 12:24-13:5a", "John 12:44-50"],
    },
    WeekdayPropers {
        key: "Easter 4",
        day: Weekday::Thursday,
        cycle: None,
        readings: ["Acts 13:13-25", "John 13:16-20"],
    },
    WeekdayPropers {
        key: "Easter 4",
        day: Weekday::Friday,
        cycle: None,
        readings: ["Acts 13:26-33", "John 14:1-6"],
    },
    WeekdayPropers {
        key: "Easter 4",
        day: Weekday::Saturday,
        cycle: None,
        readings: ["Acts 13:44-52", "John 14:7-14"],
    },
    WeekdayPropers {
        key: "Easter 5",
        day: Weekday::Monday,
        cycle: None,
        readings: ["Acts 14:5-18", "John 14:21-26"],
    },
    WeekdayPropers {
        key: "Easter 5",
        day: Weekday::Tuesday,
        cycle: None,
        readings: ["Acts 14:19-28", "John 14:27-31a"],
    },
    WeekdayPropers {
        key: "Easter 5",
        day: Weekday::Wednesday,
        cycle: None,
        readings: ["Acts 15:1-6", "John 15:1-8"],
    },
    WeekdayPropers {
        key: "Easter 5",
        day: Weekday::Thursday,
        cycle: None,
        readings: ["Acts 15:7-21", "John 15:9-11"],
    },
    WeekdayPropers {
        key: "Easter 5",
        day: Weekday::Friday,
        cycle: None,
        readings: ["Acts 15:22-31", "John 15:12-17"],
    },
    WeekdayPropers {
        key: "Easter 5",
        day: Weekday::Saturday,
        cycle: None,
        readings: ["Acts 16:1-10", "John 15:18-21"],
    },
    WeekdayPropers {
        key: "Easter 6",
        day: Weekday::Monday,
        cycle: None,
        readings: ["Acts 16:11-15", "John 15:26-16:4a"],
    },
    WeekdayPropers {
        key: "Easter 6",
        day: Weekday::Tuesday,
        cycle: None,
        readings: ["Acts 16:22-34", "John 16:5-11"],
    },
    WeekdayPropers {
        key: "Easter 6",
        day: Weekday::Wednesday,
        cycle: None,
        readings: ["Acts 17:15,22-18:1", "John 16:12-15"],
    },
    WeekdayPropers {
        key: "Easter 6",
        day: Weekday::Thursday,
        cycle: None,
        readings: ["Acts 18:1-8", "John 16:16-20"],
    },
    WeekdayPropers {
        key: "Easter 6",
        day: Weekday::Friday,
        cycle: None,
        readings: ["Acts 18:9-18", "John 16:20-23"],
    },
    WeekdayPropers {
        key: "Easter 6",
        day: Weekday::Saturday,
        cycle: None,
        readings: ["Acts 18:23-28", "John 16:23b-28"],
    },
    WeekdayPropers {
        key: "Easter 7",
        day: Weekday::Monday,
        cycle: None,
        readings: ["Acts 19:1-8", "John 16:29-33"],
    },
    WeekdayPropers {
        key: "Easter 7",
        day: Weekday::Tuesday,
        cycle: None,
        readings: ["Acts 20:17-27", "John 17:1-11a"],
    },
    WeekdayPropers {
        key: "Easter 7",
        day: Weekday::Wednesday,
        cycle: None,
        readings: ["Acts 20:28-38", "John 17:11b-19"],
    },
    WeekdayPropers {
        key: "Easter 7",
        day: Weekday::Thursday,
        cycle: None,
        readings: ["Acts 22:30,23:6-11", "John 17:20-26"],
    },
    WeekdayPropers {
        key: "Easter 7",
        day: Weekday::Friday,
        cycle: None,
        readings: ["Acts 25:13b-21", "John 21:15-19"],
    },
    WeekdayPropers {
        key: "Easter 7",
        day: Weekday::Saturday,
        cycle: None,
        readings: ["Acts 28:16-20,30-31", "John 21:20-25"],
    },
];
