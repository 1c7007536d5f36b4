//! Weekday propers for the weeks outside the seasons.
//!
//! Thirty-four numbered weeks run through the gospels of Mark, Matthew and
//! Luke in order.  The first reading alternates between the two weekday
//! cycles; the gospel is shared.  [`ORDINARY_WEEK_KEYS`] places each weekday
//! reading key of the Epiphany, Pre-Lent, Trinity and Pre-Advent weeks on
//! one of the numbered weeks.

use super::OrdinaryWeek;

/// Weekday reading keys and the ordinary week they read from.
///
/// The weeks before Lent count down to week 9, so that Monday and Tuesday
/// of "1 before Lent" read from it before Ash Wednesday takes over.  The
/// weeks before Advent always end the year on week 34.
pub static ORDINARY_WEEK_KEYS: &[(&str, u8)] = &[
    ("Epiphany 1", 1),
    ("Epiphany 2", 2),
    ("Epiphany 3", 3),
    ("Epiphany 4", 4),
    ("5 before Lent", 5),
    ("4 before Lent", 6),
    ("3 before Lent", 7),
    ("2 before Lent", 8),
    ("1 before Lent", 9),
    ("Pentecost", 6),
    ("Trinity 1", 7),
    ("Trinity 2", 8),
    ("Trinity 3", 9),
    ("Trinity 4", 10),
    ("Trinity 5", 11),
    ("Trinity 6", 12),
    ("Trinity 7", 13),
    ("Trinity 8", 14),
    ("Trinity 9", 15),
    ("Trinity 10", 16),
    ("Trinity 11", 17),
    ("Trinity 12", 18),
    ("Trinity 13", 19),
    ("Trinity 14", 20),
    ("Trinity 15", 21),
    ("Trinity 16", 22),
    ("Trinity 17", 23),
    ("Trinity 18", 24),
    ("Trinity 19", 25),
    ("Trinity 20", 26),
    ("Trinity 21", 27),
    ("Trinity 22", 28),
    ("Trinity 23", 29),
    ("Trinity 24", 30),
    ("4 before Advent", 31),
    ("3 before Advent", 32),
    ("2 before Advent", 33),
    ("1 before Advent", 34),
];

/// The numbered weeks, Monday to Saturday, as `[cycle 1, cycle 2, gospel]`.
pub static ORDINARY_WEEKS: &[OrdinaryWeek] = &[
    // ── Mark ────────────────────────────────────────────────────────────────────
    OrdinaryWeek {
        week: 1,
        days: [
            ["1 Samuel 1:1-8", "Hebrews 1:1-6", "Mark 1:14-20"],
            ["1 Samuel 1:9-20", "Hebrews 2:5-12", "Mark 1:21-28"],
            ["1 Samuel 3:1-10,19-20", "Hebrews 2:14-18", "Mark 1:29-39"],
            ["1 Samuel 4:1-11", "Hebrews 3:7-14", "Mark 1:40-45"],
            ["1 Samuel 8:4-7,10-22a", "Hebrews 4:1-5,11", "Mark 2:1-12"],
            ["1 Samuel 9:1-4,17-19,10:1a", "Hebrews 4:12-16", "Mark 2:13-17"],
        ],
    },
    OrdinaryWeek {
        week: 2,
        days: [
            ["1 Samuel 15:16-23", "Hebrews 5:1-10", "Mark 2:18-22"],
            ["1 Samuel 16:1-13", "Hebrews 6:10-20", "Mark 2:23-28"],
            ["1 Samuel 17:32-33,37,40-51", "Hebrews 7:1-3,15-17", "Mark 3:1-6"],
            ["1 Samuel 18:6-9,19:1-7", "Hebrews 7:25-8:6", "Mark 3:7-12"],
            ["1 Samuel 24:3-21", "Hebrews 8:6-13", "Mark 3:13-19"],
            ["2 Samuel 1:1-4,11-12,19,23-27", "Hebrews 9:2-3,11-14", "Mark 3:20-21"],
        ],
    },
    OrdinaryWeek {
        week: 3,
        days: [
            ["2 Samuel 5:1-7,10", "Hebrews 9:15,24-28", "Mark 3:22-30"],
            ["2 Samuel 6:12b-15,17-19", "Hebrews 10:1-10", "Mark 3:31-35"],
            ["2 Samuel 7:4-17", "Hebrews 10:11-18", "Mark 4:1-20"],
            ["2 Samuel 7:18-19,24-29", "Hebrews 10:19-25", "Mark 4:21-25"],
            ["2 Samuel 11:1-4a,5-10a,13-17", "Hebrews 10:32-39", "Mark 4:26-34"],
            ["2 Samuel 12:1-7a,10-17", "Hebrews 11:1-2,8-19", "Mark 4:35-41"],
        ],
    },
    OrdinaryWeek {
        week: 4,
        days: [
            ["2 Samuel 15:13-14,30,16:5-13", "Hebrews 11:32-40", "Mark 5:1-20"],
            ["2 Samuel 18:9-10,14b,24-25a,30-19:3", "Hebrews 12:1-4", "Mark 5:21-43"],
            ["2 Samuel 24:2,9-17", "Hebrews 12:4-7,11-15", "Mark 6:1-6"],
            ["1 Kings 2:1-4,10-12", "Hebrews 12:18-19,21-24", "Mark 6:7-13"],
            ["Ecclesiasticus 47:2-11", "Hebrews 13:1-8", "Mark 6:14-29"],
            ["1 Kings 3:4-13", "Hebrews 13:15-17,20-21", "Mark 6:30-34"],
        ],
    },
    OrdinaryWeek {
        week: 5,
        days: [
            ["1 Kings 8:1-7,9-13", "Genesis 1:1-19", "Mark 6:53-56"],
            ["1 Kings 8:22-23,27-30", "Genesis 1:20-2:4a", "Mark 7:1-13"],
            ["1 Kings 10:1-10", "Genesis 2:4b-9,15-17", "Mark 7:14-23"],
            ["1 Kings 11:4-13", "Genesis 2:18-25", "Mark 7:24-30"],
            ["1 Kings 11:29-32,12:19", "Genesis 3:1-8", "Mark 7:31-37"],
            ["1 Kings 12:26-32,13:33-34", "Genesis 3:9-24", "Mark 8:1-10"],
        ],
    },
    OrdinaryWeek {
        week: 6,
        days: [
            ["James 1:1-11", "Genesis 4:1-15,25", "Mark 8:11-13"],
            ["James 1:12-18", "Genesis 6:5-8,7:1-5,10", "Mark 8:14-21"],
            ["James 1:19-27", "Genesis 8:6-13,20-22", "Mark 8:22-26"],
            ["James 2:1-9", "Genesis 9:1-13", "Mark 8:27-33"],
            ["James 2:14-24,26", "Genesis 11:1-9", "Mark 8:34-9:1"],
            ["James 3:1-10", "Hebrews 11:1-7", "Mark 9:2-13"],
        ],
    },
    OrdinaryWeek {
        week: 7,
        days: [
            ["James 3:13-18", "Ecclesiasticus 1:1-10", "Mark 9:14-29"],
            ["James 4:1-10", "Ecclesiasticus 2:1-11", "Mark 9:30-37"],
            ["James 4:13-17", "Ecclesiasticus 4:11-19", "Mark 9:38-40"],
            ["James 5:1-6", "Ecclesiasticus 5:1-8", "Mark 9:41-50"],
            ["James 5:9-12", "Ecclesiasticus 6:5-17", "Mark 10:1-12"],
            ["James 5:13-20", "Ecclesiasticus 17:1-15", "Mark 10:13-16"],
        ],
    },
    OrdinaryWeek {
        week: 8,
        days: [
            ["1 Peter 1:3-9", "Ecclesiasticus 17:20-24", "Mark 10:17-27"],
            ["1 Peter 1:10-16", "Ecclesiasticus 35:1-12", "Mark 10:28-31"],
            ["1 Peter 1:18-25", "Ecclesiasticus 36:1,4-5a,10-17", "Mark 10:32-45"],
            ["1 Peter 2:2-5,9-12", "Ecclesiasticus 42:15-25", "Mark 10:46-52"],
            ["1 Peter 4:7-13", "Ecclesiasticus 44:1,9-13", "Mark 11:11-26"],
            ["Jude 17,20-25", "Ecclesiasticus 51:12-20", "Mark 11:27-33"],
        ],
    },
    OrdinaryWeek {
        week: 9,
        days: [
            ["2 Peter 1:2-7", "Tobit 1:3,2:1a-8", "Mark 12:1-12"],
            ["2 Peter 3:12-15a,17-18", "Tobit 2:9-14", "Mark 12:13-17"],
            ["2 Timothy 1:1-3,6-12", "Tobit 3:1-11a,16-17a", "Mark 12:18-27"],
            ["2 Timothy 2:8-15", "Tobit 6:10-11,7:1,9-17,8:4-9a", "Mark 12:28-34"],
            ["2 Timothy 3:10-17", "Tobit 11:5-17", "Mark 12:35-37"],
            ["2 Timothy 4:1-8", "Tobit 12:1,5-15,20", "Mark 12:38-44"],
        ],
    },
    // ── Matthew ─────────────────────────────────────────────────────────────────
    OrdinaryWeek {
        week: 10,
        days: [
            ["1 Kings 17:1-6", "2 Corinthians 1:1-7", "Matthew 5:1-12"],
            ["1 Kings 17:7-16", "2 Corinthians 1:18-22", "Matthew 5:13-16"],
            ["1 Kings 18:20-39", "2 Corinthians 3:4-11", "Matthew 5:17-19"],
            ["1 Kings 18:41-46", "2 Corinthians 3:15-4:1,3-6", "Matthew 5:20-26"],
            ["1 Kings 19:9a,11-16", "2 Corinthians 4:7-15", "Matthew 5:27-32"],
            ["1 Kings 19:19-21", "2 Corinthians 5:14-21", "Matthew 5:33-37"],
        ],
    },
    OrdinaryWeek {
        week: 11,
        days: [
            ["1 Kings 21:1-16", "2 Corinthians 6:1-10", "Matthew 5:38-42"],
            ["1 Kings 21:17-29", "2 Corinthians 8:1-9", "Matthew 5:43-48"],
            ["2 Kings 2:1,6-14", "2 Corinthians 9:6-11", "Matthew 6:1-6,16-18"],
            ["Ecclesiasticus 48:1-14", "2 Corinthians 11:1-11", "Matthew 6:7-15"],
            ["2 Kings 11:1-4,9-18,20", "2 Corinthians 11:18,21-30", "Matthew 6:19-23"],
            ["2 Chronicles 24:17-25", "2 Corinthians 12:1-10", "Matthew 6:24-34"],
        ],
    },
    OrdinaryWeek {
        week: 12,
        days: [
            ["2 Kings 17:5-8,13-15a,18", "Genesis 12:1-9", "Matthew 7:1-5"],
            ["2 Kings 19:9b-11,14-21,31-35a,36", "Genesis 13:2,5-18", "Matthew 7:6,12-14"],
            ["2 Kings 22:8-13,23:1-3", "Genesis 15:1-12,17-18", "Matthew 7:15-20"],
            ["2 Kings 24:8-17", "Genesis 16:1-12,15-16", "Matthew 7:21-29"],
            ["2 Kings 25:1-12", "Genesis 17:1,9-10,15-22", "Matthew 8:1-4"],
            ["Lamentations 2:2,10-14,18-19", "Genesis 18:1-15", "Matthew 8:5-17"],
        ],
    },
    OrdinaryWeek {
        week: 13,
        days: [
            ["Amos 2:6-10,13-16", "Genesis 18:16-33", "Matthew 8:18-22"],
            ["Amos 3:1-8,4:11-12", "Genesis 19:15-29", "Matthew 8:23-27"],
            ["Amos 5:14-15,21-24", "Genesis 21:5,8-20", "Matthew 8:28-34"],
            ["Amos 7:10-17", "Genesis 22:1-19", "Matthew 9:1-8"],
            ["Amos 8:4-6,9-12", "Genesis 23:1-4,19,24:1-8,62-67", "Matthew 9:9-13"],
            ["Amos 9:11-15", "Genesis 27:1-5,15-29", "Matthew 9:14-17"],
        ],
    },
    OrdinaryWeek {
        week: 14,
        days: [
            ["Hosea 2:14-16,19-20", "Genesis 28:10-22a", "Matthew 9:18-26"],
            ["Hosea 8:4-7,11-13", "Genesis 32:22-32", "Matthew 9:32-38"],
            ["Hosea 10:1-3,7-8,12", "Genesis 41:55-57,42:5-7a,17-24a", "Matthew 10:1-7"],
            ["Hosea 11:1-4,8c-9", "Genesis 44:18-21,23b-29,45:1-5", "Matthew 10:7-15"],
            ["Hosea 14:1-9", "Genesis 46:1-7,28-30", "Matthew 10:16-23"],
            ["Isaiah 6:1-8", "Genesis 49:29-32,50:15-26a", "Matthew 10:24-33"],
        ],
    },
    OrdinaryWeek {
        week: 15,
        days: [
            ["Isaiah 1:10-17", "Exodus 1:8-14,22", "Matthew 10:34-11:1"],
            ["Isaiah 7:1-9", "Exodus 2:1-15a", "Matthew 11:20-24"],
            ["Isaiah 10:5-7,13b-16", "Exodus 3:1-6,9-12", "Matthew 11:25-27"],
            ["Isaiah 26:7-9,12,16-19", "Exodus 3:13-20", "Matthew 11:28-30"],
            ["Isaiah 38:1-6,21-22,7-8", "Exodus 11:10-12:14", "Matthew 12:1-8"],
            ["Micah 2:1-5", "Exodus 12:37-42", "Matthew 12:14-21"],
        ],
    },
    OrdinaryWeek {
        week: 16,
        days: [
            ["Micah 6:1-4,6-8", "Exodus 14:5-18", "Matthew 12:38-42"],
            ["Micah 7:14-15,18-20", "Exodus 14:21-15:1", "Matthew 12:46-50"],
            ["Jeremiah 1:1,4-10", "Exodus 16:1-5,9-15", "Matthew 13:1-9"],
            ["Jeremiah 2:1-3,7-8,12-13", "Exodus 19:1-2,9-11,16-20b", "Matthew 13:10-17"],
            ["Jeremiah 3:14-17", "Exodus 20:1-17", "Matthew 13:18-23"],
            ["Jeremiah 7:1-11", "Exodus 24:3-8", "Matthew 13:24-30"],
        ],
    },
    OrdinaryWeek {
        week: 17,
        days: [
            ["Jeremiah 13:1-11", "Exodus 32:15-24,30-34", "Matthew 13:31-35"],
            ["Jeremiah 14:17-22", "Exodus 33:7-11,34:5b-9,28", "Matthew 13:36-43"],
            ["Jeremiah 15:10,16-21", "Exodus 34:29-35", "Matthew 13:44-46"],
            ["Jeremiah 18:1-6", "Exodus 40:16-21,34-38", "Matthew 13:47-53"],
            ["Jeremiah 26:1-9", "Leviticus 23:1,4-11,15-16,27,34b-37", "Matthew 13:54-58"],
            ["Jeremiah 26:11-16,24", "Leviticus 25:1,8-17", "Matthew 14:1-12"],
        ],
    },
    OrdinaryWeek {
        week: 18,
        days: [
            ["Jeremiah 28:1-17", "Numbers 11:4b-15", "Matthew 14:13-21"],
            ["Jeremiah 30:1-2,12-15,18-22", "Numbers 12:1-13", "Matthew 14:22-36"],
            ["Jeremiah 31:1-7", "Numbers 13:1-2,25-14:1,26-29a,34-35", "Matthew 15:21-28"],
            ["Jeremiah 31:31-34", "Numbers 20:1-13", "Matthew 16:13-23"],
            ["Nahum 1:15,2:2,3:1-3,6-7", "Deuteronomy 4:32-40", "Matthew 16:24-28"],
            ["Habakkuk 1:12-2:4", "Deuteronomy 6:4-13", "Matthew 17:14-20"],
        ],
    },
    OrdinaryWeek {
        week: 19,
        days: [
            ["Ezekiel 1:2-5,24-28c", "Deuteronomy 10:12-22", "Matthew 17:22-27"],
            ["Ezekiel 2:8-3:4", "Deuteronomy 31:1-8", "Matthew 18:1-5,10,12-14"],
            ["Ezekiel 9:1-7,10:18-22", "Deuteronomy 34:1-12", "Matthew 18:15-20"],
            ["Ezekiel 12:1-12", "Joshua 3:7-10a,11,13-17", "Matthew 18:21-19:1"],
            ["Ezekiel 16:1-15,60-63", "Joshua 24:1-13", "Matthew 19:3-12"],
            ["Ezekiel 18:1-10,13b,30-32", "Joshua 24:14-29", "Matthew 19:13-15"],
        ],
    },
    OrdinaryWeek {
        week: 20,
        days: [
            ["Ezekiel 24:15-24", "Judges 2:11-19", "Matthew 19:16-22"],
            ["Ezekiel 28:1-10", "Judges 6:11-24a", "Matthew 19:23-30"],
            ["Ezekiel 34:1-11", "Judges 9:6-15", "Matthew 20:1-16"],
            ["Ezekiel 36:23-28", "Judges 11:29-39a", "Matthew 22:1-14"],
            ["Ezekiel 37:1-14", "Ruth 1:1,3-6,14b-16,22", "Matthew 22:34-40"],
            ["Ezekiel 43:1-7a", "Ruth 2:1-3,8-11,4:13-17", "Matthew 23:1-12"],
        ],
    },
    OrdinaryWeek {
        week: 21,
        days: [
            ["2 Thessalonians 1:1-5,11-12", "1 Thessalonians 1:1-5,8b-10", "Matthew 23:13-22"],
            ["2 Thessalonians 2:1-3a,14-17", "1 Thessalonians 2:1-8", "Matthew 23:23-26"],
            ["2 Thessalonians 3:6-10,16-18", "1 Thessalonians 2:9-13", "Matthew 23:27-32"],
            ["1 Corinthians 1:1-9", "1 Thessalonians 3:7-13", "Matthew 24:42-51"],
            ["1 Corinthians 1:17-25", "1 Thessalonians 4:1-8", "Matthew 25:1-13"],
            ["1 Corinthians 1:26-31", "1 Thessalonians 4:9-11", "Matthew 25:14-30"],
        ],
    },
    // ── Luke ────────────────────────────────────────────────────────────────────
    OrdinaryWeek {
        week: 22,
        days: [
            ["1 Corinthians 2:1-5", "1 Thessalonians 4:13-18", "Luke 4:16-30"],
            ["1 Corinthians 2:10b-16", "1 Thessalonians 5:1-6,9-11", "Luke 4:31-37"],
            ["1 Corinthians 3:1-9", "Colossians 1:1-8", "Luke 4:38-44"],
            ["1 Corinthians 3:18-23", "Colossians 1:9-14", "Luke 5:1-11"],
            ["1 Corinthians 4:1-5", "Colossians 1:15-20", "Luke 5:33-39"],
            ["1 Corinthians 4:6b-15", "Colossians 1:21-23", "Luke 6:1-5"],
        ],
    },
    OrdinaryWeek {
        week: 23,
        days: [
            ["1 Corinthians 5:1-8", "Colossians 1:24-2:3", "Luke 6:6-11"],
            ["1 Corinthians 6:1-11", "Colossians 2:6-15", "Luke 6:12-19"],
            ["1 Corinthians 7:25-31", "Colossians 3:1-11", "Luke 6:20-26"],
            ["1 Corinthians 8:1b-7,11-13", "Colossians 3:12-17", "Luke 6:27-38"],
            ["1 Corinthians 9:16-19,22b-27", "1 Timothy 1:1-2,12-14", "Luke 6:39-42"],
            ["1 Corinthians 10:14-22", "1 Timothy 1:15-17", "Luke 6:43-49"],
        ],
    },
    OrdinaryWeek {
        week: 24,
        days: [
            ["1 Corinthians 11:17-26,33", "1 Timothy 2:1-8", "Luke 7:1-10"],
            ["1 Corinthians 12:12-14,27-31a", "1 Timothy 3:1-13", "Luke 7:11-17"],
            ["1 Corinthians 12:31-13:13", "1 Timothy 3:14-16", "Luke 7:31-35"],
            ["1 Corinthians 15:1-11", "1 Timothy 4:12-16", "Luke 7:36-50"],
            ["1 Corinthians 15:12-20", "1 Timothy 6:2b-12", "Luke 8:1-3"],
            ["1 Corinthians 15:35-37,42-49", "1 Timothy 6:13-16", "Luke 8:4-15"],
        ],
    },
    OrdinaryWeek {
        week: 25,
        days: [
            ["Proverbs 3:27-34", "Ezra 1:1-6", "Luke 8:16-18"],
            ["Proverbs 21:1-6,10-13", "Ezra 6:7-8,12b,14-20", "Luke 8:19-21"],
            ["Proverbs 30:5-9", "Ezra 9:5-9", "Luke 9:1-6"],
            ["Ecclesiastes 1:2-11", "Haggai 1:1-8", "Luke 9:7-9"],
            ["Ecclesiastes 3:1-11", "Haggai 1:15b-2:9", "Luke 9:18-22"],
            ["Ecclesiastes 11:9-12:8", "Zechariah 2:1-5,10-11a", "Luke 9:43b-45"],
        ],
    },
    OrdinaryWeek {
        week: 26,
        days: [
            ["Job 1:6-22", "Zechariah 8:1-8", "Luke 9:46-50"],
            ["Job 3:1-3,11-17,20-23", "Zechariah 8:20-23", "Luke 9:51-56"],
            ["Job 9:1-12,14-16", "Nehemiah 2:1-8", "Luke 9:57-62"],
            ["Job 19:21-27a", "Nehemiah 8:1-4a,5-6,7b-12", "Luke 10:1-12"],
            ["Job 38:1,12-21,40:3-5", "Baruch 1:15-22", "Luke 10:13-16"],
            ["Job 42:1-3,5-6,12-17", "Baruch 4:5-12,27-29", "Luke 10:17-24"],
        ],
    },
    OrdinaryWeek {
        week: 27,
        days: [
            ["Galatians 1:6-12", "Jonah 1:1-2:1,10", "Luke 10:25-37"],
            ["Galatians 1:13-24", "Jonah 3:1-10", "Luke 10:38-42"],
            ["Galatians 2:1-2,7-14", "Jonah 4:1-11", "Luke 11:1-4"],
            ["Galatians 3:1-5", "Malachi 3:13-4:2a", "Luke 11:5-13"],
            ["Galatians 3:7-14", "Joel 1:13-15,2:1-2", "Luke 11:15-26"],
            ["Galatians 3:22-29", "Joel 3:12-21", "Luke 11:27-28"],
        ],
    },
    OrdinaryWeek {
        week: 28,
        days: [
            ["Galatians 4:22-24,26-27,31-5:1", "Romans 1:1-7", "Luke 11:29-32"],
            ["Galatians 5:1-6", "Romans 1:16-25", "Luke 11:37-41"],
            ["Galatians 5:18-25", "Romans 2:1-11", "Luke 11:42-46"],
            ["Ephesians 1:1-10", "Romans 3:21-30", "Luke 11:47-54"],
            ["Ephesians 1:11-14", "Romans 4:1-8", "Luke 12:1-7"],
            ["Ephesians 1:15-23", "Romans 4:13,16-18", "Luke 12:8-12"],
        ],
    },
    OrdinaryWeek {
        week: 29,
        days: [
            ["Ephesians 2:1-10", "Romans 4:20-25", "Luke 12:13-21"],
            ["Ephesians 2:12-22", "Romans 5:12,15b,17-19,20b-21", "Luke 12:35-38"],
            ["Ephesians 3:2-12", "Romans 6:12-18", "Luke 12:39-48"],
            ["Ephesians 3:14-21", "Romans 6:19-23", "Luke 12:49-53"],
            ["Ephesians 4:1-6", "Romans 7:18-25a", "Luke 12:54-59"],
            ["Ephesians 4:7-16", "Romans 8:1-11", "Luke 13:1-9"],
        ],
    },
    OrdinaryWeek {
        week: 30,
        days: [
            ["Ephesians 4:32-5:8", "Romans 8:12-17", "Luke 13:10-17"],
            ["Ephesians 5:21-33", "Romans 8:18-25", "Luke 13:18-21"],
            ["Ephesians 6:1-9", "Romans 8:26-30", "Luke 13:22-30"],
            ["Ephesians 6:10-20", "Romans 8:31b-39", "Luke 13:31-35"],
            ["Philippians 1:1-11", "Romans 9:1-5", "Luke 14:1-6"],
            ["Philippians 1:18b-26", "Romans 11:1-2a,11-12,25-29", "Luke 14:1,7-11"],
        ],
    },
    OrdinaryWeek {
        week: 31,
        days: [
            ["Philippians 2:1-4", "Romans 11:29-36", "Luke 14:12-14"],
            ["Philippians 2:5-11", "Romans 12:5-16b", "Luke 14:15-24"],
            ["Philippians 2:12-18", "Romans 13:8-10", "Luke 14:25-33"],
            ["Philippians 3:3-8a", "Romans 14:7-12", "Luke 15:1-10"],
            ["Philippians 3:17-4:1", "Romans 15:14-21", "Luke 16:1-8"],
            ["Philippians 4:10-19", "Romans 16:3-9,16,22-27", "Luke 16:9-15"],
        ],
    },
    OrdinaryWeek {
        week: 32,
        days: [
            ["Titus 1:1-9", "Wisdom 1:1-7", "Luke 17:1-6"],
            ["Titus 2:1-8,11-14", "Wisdom 2:23-3:9", "Luke 17:7-10"],
            ["Titus 3:1-7", "Wisdom 6:1-11", "Luke 17:11-19"],
            ["Philemon 7-20", "Wisdom 7:22b-8:1", "Luke 17:20-25"],
            ["2 John 4-9", "Wisdom 13:1-9", "Luke 17:26-37"],
            ["3 John 5-8", "Wisdom 18:14-16,19:6-9", "Luke 18:1-8"],
        ],
    },
    OrdinaryWeek {
        week: 33,
        days: [
            ["Revelation 1:1-4,2:1-5", "1 Maccabees 1:10-15,41-43,54-57,62-63", "Luke 18:35-43"],
            ["Revelation 3:1-6,14-22", "2 Maccabees 6:18-31", "Luke 19:1-10"],
            ["Revelation 4:1-11", "2 Maccabees 7:1,20-31", "Luke 19:11-28"],
            ["Revelation 5:1-10", "1 Maccabees 2:15-29", "Luke 19:41-44"],
            ["Revelation 10:8-11", "1 Maccabees 4:36-37,52-59", "Luke 19:45-48"],
            ["Revelation 11:4-12", "1 Maccabees 6:1-13", "Luke 20:27-40"],
        ],
    },
    OrdinaryWeek {
        week: 34,
        days: [
            ["Revelation 14:1-3,4b-5", "Daniel 1:1-6,8-20", "Luke 21:1-4"],
            ["Revelation 14:14-19", "Daniel 2:31-45", "Luke 21:5-11"],
            ["Revelation 15:1-4", "Daniel 5:1-6,13-14,16-17,23-28", "Luke 21:12-19"],
            ["Revelation 18:1-2,21-23,19:1-3,9a", "Daniel 6:12-28", "Luke 21:20-28"],
            ["Revelation 20:1-4,11-21:2", "Daniel 7:2-14", "Luke 21:29-33"],
            ["Revelation 22:1-7", "Daniel 7:15-27", "Luke 21:34-36"],
        ],
    },
];
