//! Sunday propers for the three-year cycle.

use super::SundayPropers;

/// Sunday readings keyed by week name.
pub static SUNDAY_READINGS: &[SundayPropers] = &[
    // ── Advent ──────────────────────────────────────────────────────────────────
    SundayPropers {
        week: "Advent 1",
        a: ["Isaiah 2:1-5", "Romans 13:11-14", "Matthew 24:36-44", "Psalm 122"],
        b: ["Isaiah 64:1-9", "1 Corinthians 1:3-9", "Mark 13:24-37", "Psalm 80:1-7,17-19"],
        c: ["Jeremiah 33:14-16", "1 Thessalonians 3:9-13", "Luke 21:25-36", "Psalm 25:1-10"],
    },
    SundayPropers {
        week: "Advent 2",
        a: ["Isaiah 11:1-10", "Romans 15:4-13", "Matthew 3:1-12", "Psalm 72:1-7,18-19"],
        b: ["Isaiah 40:1-11", "2 Peter 3:8-15a", "Mark 1:1-8", "Psalm 85:1-2,8-13"],
        c: ["Malachi 3:1-4", "Philippians 1:3-11", "Luke 3:1-6", "Luke 1:68-79"],
    },
    SundayPropers {
        week: "Advent 3",
        a: ["Isaiah 35:1-10", "James 5:7-10", "Matthew 11:2-11", "Psalm 146:5-10"],
        b: ["Isaiah 61:1-4,8-11", "1 Thessalonians 5:16-24", "John 1:6-8,19-28", "Psalm 126"],
        c: ["Zephaniah 3:14-20", "Philippians 4:4-7", "Luke 3:7-18", "Isaiah 12:2-6"],
    },
    SundayPropers {
        week: "Advent 4",
        a: ["Isaiah 7:10-16", "Romans 1:1-7", "Matthew 1:18-25", "Psalm 80:1-7,17-19"],
        b: ["2 Samuel 7:1-11,16", "Romans 16:25-27", "Luke 1:26-38", "Luke 1:46b-55"],
        c: ["Micah 5:2-5a", "Hebrews 10:5-10", "Luke 1:39-45", "Luke 1:46b-55"],
    },
    // ── Christmas ───────────────────────────────────────────────────────────────
    SundayPropers {
        week: "Christmas 1",
        a: ["Isaiah 63:7-9", "Hebrews 2:10-18", "Matthew 2:13-23", "Psalm 148"],
        b: ["Isaiah 61:10-62:3", "Galatians 4:4-7", "Luke 2:22-40", "Psalm 148"],
        c: ["1 Samuel 2:18-20,26", "Colossians 3:12-17", "Luke 2:41-52", "Psalm 148"],
    },
    SundayPropers {
        week: "Christmas 2",
        a: ["Jeremiah 31:7-14", "Ephesians 1:3-14", "John 1:1-18", "Psalm 147:12-20"],
        b: ["Jeremiah 31:7-14", "Ephesians 1:3-14", "John 1:1-18", "Psalm 147:12-20"],
        c: ["Jeremiah 31:7-14", "Ephesians 1:3-14", "John 1:1-18", "Psalm 147:12-20"],
    },
    // ── Epiphany ────────────────────────────────────────────────────────────────
    SundayPropers {
        week: "Epiphany 1",
        a: ["Isaiah 42:1-9", "Acts 10:34-43", "Matthew 3:13-17", "Psalm 29"],
        b: ["Genesis 1:1-5", "Acts 19:1-7", "Mark 1:4-11", "Psalm 29"],
        c: ["Isaiah 43:1-7", "Acts 8:14-17", "Luke 3:15-17,21-22", "Psalm 29"],
    },
    SundayPropers {
        week: "Epiphany 2",
        a: ["Isaiah 49:1-7", "1 Corinthians 1:1-9", "John 1:29-42", "Psalm 40:1-11"],
        b: ["1 Samuel 3:1-10", "1 Corinthians 6:12-20", "John 1:43-51", "Psalm 139:1-6,13-18"],
        c: ["Isaiah 62:1-5", "1 Corinthians 12:1-11", "John 2:1-11", "Psalm 36:5-10"],
    },
    SundayPropers {
        week: "Epiphany 3",
        a: ["Isaiah 9:1-4", "1 Corinthians 1:10-18", "Matthew 4:12-23", "Psalm 27:1,4-9"],
        b: ["Jonah 3:1-5,10", "1 Corinthians 7:29-31", "Mark 1:14-20", "Psalm 62:5-12"],
        c: ["Nehemiah 8:1-3,5-6,8-10", "1 Corinthians 12:12-31a", "Luke 4:14-21", "Psalm 19"],
    },
    SundayPropers {
        week: "Epiphany 4",
        a: ["Micah 6:1-8", "1 Corinthians 1:18-31", "Matthew 5:1-12", "Psalm 15"],
        b: ["Deuteronomy 18:15-20", "1 Corinthians 8:1-13", "Mark 1:21-28", "Psalm 111"],
        c: ["Jeremiah 1:4-10", "1 Corinthians 13:1-13", "Luke 4:21-30", "Psalm 71:1-6"],
    },
    SundayPropers {
        week: "Epiphany 5",
        a: ["Isaiah 58:1-9a", "1 Corinthians 2:1-12", "Matthew 5:13-20", "Psalm 112:1-9"],
        b: ["Isaiah 40:21-31", "1 Corinthians 9:16-23", "Mark 1:29-39", "Psalm 147:1-11,20c"],
        c: ["Isaiah 6:1-8", "1 Corinthians 15:1-11", "Luke 5:1-11", "Psalm 138"],
    },
    SundayPropers {
        week: "Epiphany 6",
        a: ["Deuteronomy 30:15-20", "1 Corinthians 3:1-9", "Matthew 5:21-37", "Psalm 119:1-8"],
        b: ["2 Kings 5:1-14", "1 Corinthians 9:24-27", "Mark 1:40-45", "Psalm 30"],
        c: ["Jeremiah 17:5-10", "1 Corinthians 15:12-20", "Luke 6:17-26", "Psalm 1"],
    },
    SundayPropers {
        week: "Epiphany 7",
        a: [
            "Leviticus 19:1-2,9-18",
            "1 Corinthians 3:10-11,16-23",
            "Matthew 5:38-48",
            "Psalm 119:33-40",
        ],
        b: ["Isaiah 43:18-25", "2 Corinthians 1:18-22", "Mark 2:1-12", "Psalm 41"],
        c: [
            "Genesis 45:3-11,15",
            "1 Corinthians 15:35-38,42-50",
            "Luke 6:27-38",
            "Psalm 37:1-11,39-40",
        ],
    },
    // ── Sundays before Lent ─────────────────────────────────────────────────────
    SundayPropers {
        week: "2 before Lent",
        a: ["Genesis 1:1-2:3", "Romans 8:18-25", "Matthew 6:25-34", "Psalm 136"],
        b: ["Proverbs 8:1,22-31", "Colossians 1:15-20", "John 1:1-14", "Psalm 104:26-37"],
        c: ["Genesis 2:4b-9,15-25", "Revelation 4", "Luke 8:22-25", "Psalm 65"],
    },
    SundayPropers {
        week: "1 before Lent",
        a: ["Exodus 24:12-18", "2 Peter 1:16-21", "Matthew 17:1-9", "Psalm 2"],
        b: ["2 Kings 2:1-12", "2 Corinthians 4:3-6", "Mark 9:2-9", "Psalm 50:1-6"],
        c: ["Exodus 34:29-35", "2 Corinthians 3:12-4:2", "Luke 9:28-43a", "Psalm 99"],
    },
    // ── Lent ────────────────────────────────────────────────────────────────────
    SundayPropers {
        week: "Lent 1",
        a: ["Genesis 2:15-17,3:1-7", "Romans 5:12-19", "Matthew 4:1-11", "Psalm 32"],
        b: ["Genesis 9:8-17", "1 Peter 3:18-22", "Mark 1:9-15", "Psalm 25:1-10"],
        c: ["Deuteronomy 26:1-11", "Romans 10:8b-13", "Luke 4:1-13", "Psalm 91:1-2,9-16"],
    },
    SundayPropers {
        week: "Lent 2",
        a: ["Genesis 12:1-4a", "Romans 4:1-5,13-17", "John 3:1-17", "Psalm 121"],
        b: ["Genesis 17:1-7,15-16", "Romans 4:13-25", "Mark 8:31-38", "Psalm 22:23-31"],
        c: ["Genesis 15:1-12,17-18", "Philippians 3:17-4:1", "Luke 13:31-35", "Psalm 27"],
    },
    SundayPropers {
        week: "Lent 3",
        a: ["Exodus 17:1-7", "Romans 5:1-11", "John 4:5-42", "Psalm 95"],
        b: ["Exodus 20:1-17", "1 Corinthians 1:18-25", "John 2:13-22", "Psalm 19"],
        c: ["Isaiah 55:1-9", "1 Corinthians 10:1-13", "Luke 13:1-9", "Psalm 63:1-8"],
    },
    SundayPropers {
        week: "Lent 4",
        a: ["1 Samuel 16:1-13", "Ephesians 5:8-14", "John 9:1-41", "Psalm 23"],
        b: ["Numbers 21:4-9", "Ephesians 2:1-10", "John 3:14-21", "Psalm 107:1-3,17-22"],
        c: ["Joshua 5:9-12", "2 Corinthians 5:16-21", "Luke 15:1-3,11b-32", "Psalm 32"],
    },
    SundayPropers {
        week: "Lent 5",
        a: ["Ezekiel 37:1-14", "Romans 8:6-11", "John 11:1-45", "Psalm 130"],
        b: ["Jeremiah 31:31-34", "Hebrews 5:5-10", "John 12:20-33", "Psalm 51:1-12"],
        c: ["Isaiah 43:16-21", "Philippians 3:4b-14", "John 12:1-8", "Psalm 126"],
    },
    // Palm Sunday
    SundayPropers {
        week: "Holy Week",
        a: ["Isaiah 50:4-9a", "Philippians 2:5-11", "Matthew 26:14-27:66", "Psalm 31:9-16"],
        b: ["Isaiah 50:4-9a", "Philippians 2:5-11", "Mark 14:1-15:47", "Psalm 31:9-16"],
        c: ["Isaiah 50:4-9a", "Philippians 2:5-11", "Luke 22:14-23:56", "Psalm 31:9-16"],
    },
    // ── Easter ──────────────────────────────────────────────────────────────────
    // Easter Day
    SundayPropers {
        week: "Easter 1",
        a: ["Acts 10:34-43", "Colossians 3:1-4", "John 20:1-18", "Psalm 118:1-2,14-24"],
        b: ["Acts 10:34-43", "1 Corinthians 15:1-11", "Mark 16:1-8", "Psalm 118:1-2,14-24"],
        c: ["Acts 10:34-43", "1 Corinthians 15:19-26", "Luke 24:1-12", "Psalm 118:1-2,14-24"],
    },
    SundayPropers {
        week: "Easter 2",
        a: ["Acts 2:14a,22-32", "1 Peter 1:3-9", "John 20:19-31", "Psalm 16"],
        b: ["Acts 4:32-35", "1 John 1:1-2:2", "John 20:19-31", "Psalm 133"],
        c: ["Acts 5:27-32", "Revelation 1:4-8", "John 20:19-31", "Psalm 118:14-29"],
    },
    SundayPropers {
        week: "Easter 3",
        a: ["Acts 2:14a,36-41", "1 Peter 1:17-23", "Luke 24:13-35", "Psalm 116:1-4,12-19"],
        b: ["Acts 3:12-19", "1 John 3:1-7", "Luke 24:36b-48", "Psalm 4"],
        c: ["Acts 9:1-20", "Revelation 5:11-14", "John 21:1-19", "Psalm 30"],
    },
    SundayPropers {
        week: "Easter 4",
        a: ["Acts 2:42-47", "1 Peter 2:19-25", "John 10:1-10", "Psalm 23"],
        b: ["Acts 4:5-12", "1 John 3:16-24", "John 10:11-18", "Psalm 23"],
        c: ["Acts 9:36-43", "Revelation 7:9-17", "John 10:22-30", "Psalm 23"],
    },
    SundayPropers {
        week: "Easter 5",
        a: ["Acts 7:55-60", "1 Peter 2:2-10", "John 14:1-14", "Psalm 31:1-5,15-16"],
        b: ["Acts 8:26-40", "1 John 4:7-21", "John 15:1-8", "Psalm 22:25-31"],
        c: ["Acts 11:1-18", "Revelation 21:1-6", "John 13:31-35", "Psalm 148"],
    },
    SundayPropers {
        week: "Easter 6",
        a: ["Acts 17:22-31", "1 Peter 3:13-22", "John 14:15-21", "Psalm 66:8-20"],
        b: ["Acts 10:44-48", "1 John 5:1-6", "John 15:9-17", "Psalm 98"],
        c: ["Acts 16:9-15", "Revelation 21:10,22-22:5", "John 14:23-29", "Psalm 67"],
    },
    SundayPropers {
        week: "Easter 7",
        a: ["Acts 1:6-14", "1 Peter 4:12-14,5:6-11", "John 17:1-11", "Psalm 68:1-10,32-35"],
        b: ["Acts 1:15-17,21-26", "1 John 5:9-13", "John 17:6-19", "Psalm 1"],
        c: ["Acts 16:16-34", "Revelation 22:12-14,16-17,20-21", "John 17:20-26", "Psalm 97"],
    },
    // ── Pentecost and Trinity ───────────────────────────────────────────────────
    SundayPropers {
        week: "Pentecost",
        a: ["Acts 2:1-21", "1 Corinthians 12:3b-13", "John 20:19-23", "Psalm 104:24-34,35b"],
        b: ["Acts 2:1-21", "Romans 8:22-27", "John 15:26-27,16:4b-15", "Psalm 104:24-34,35b"],
        c: ["Acts 2:1-21", "Romans 8:14-17", "John 14:8-17,25-27", "Psalm 104:24-34,35b"],
    },
    SundayPropers {
        week: "Trinity",
        a: ["Genesis 1:1-2:4a", "2 Corinthians 13:11-13", "Matthew 28:16-20", "Psalm 8"],
        b: ["Isaiah 6:1-8", "Romans 8:12-17", "John 3:1-17", "Psalm 29"],
        c: ["Proverbs 8:1-4,22-31", "Romans 5:1-5", "John 16:12-15", "Psalm 8"],
    },
    // ── Ordinary Time after Trinity ─────────────────────────────────────────────
    SundayPropers {
        week: "Proper 3",
        a: ["Isaiah 49:8-16a", "1 Corinthians 4:1-5", "Matthew 6:24-34", "Psalm 131"],
        b: ["Hosea 2:14-20", "2 Corinthians 3:1-6", "Mark 2:13-22", "Psalm 103:1-13,22"],
        c: ["Isaiah 55:10-13", "1 Corinthians 15:51-58", "Luke 6:39-49", "Psalm 92:1-4,12-15"],
    },
    SundayPropers {
        week: "Proper 4",
        a: [
            "Genesis 6:9-22,7:24,8:14-19",
            "Romans 1:16-17,3:22b-28",
            "Matthew 7:21-29",
            "Psalm 46",
        ],
        b: ["1 Samuel 3:1-20", "2 Corinthians 4:5-12", "Mark 2:23-3:6", "Psalm 139:1-6,13-18"],
        c: ["1 Kings 18:20-39", "Galatians 1:1-12", "Luke 7:1-10", "Psalm 96"],
    },
    SundayPropers {
        week: "Proper 5",
        a: ["Genesis 12:1-9", "Romans 4:13-25", "Matthew 9:9-13,18-26", "Psalm 33:1-12"],
        b: ["1 Samuel 8:4-20", "2 Corinthians 4:13-5:1", "Mark 3:20-35", "Psalm 138"],
        c: ["1 Kings 17:8-24", "Galatians 1:11-24", "Luke 7:11-17", "Psalm 146"],
    },
    SundayPropers {
        week: "Proper 6",
        a: ["Genesis 18:1-15", "Romans 5:1-8", "Matthew 9:35-10:8", "Psalm 116:1-2,12-19"],
        b: ["1 Samuel 15:34-16:13", "2 Corinthians 5:6-17", "Mark 4:26-34", "Psalm 20"],
        c: ["1 Kings 21:1-21a", "Galatians 2:15-21", "Luke 7:36-8:3", "Psalm 5:1-8"],
    },
    SundayPropers {
        week: "Proper 7",
        a: ["Genesis 21:8-21", "Romans 6:1b-11", "Matthew 10:24-39", "Psalm 86:1-10,16-17"],
        b: ["1 Samuel 17:32-49", "2 Corinthians 6:1-13", "Mark 4:35-41", "Psalm 9:9-20"],
        c: ["1 Kings 19:1-15a", "Galatians 3:23-29", "Luke 8:26-39", "Psalm 42"],
    },
    SundayPropers {
        week: "Proper 8",
        a: ["Genesis 22:1-14", "Romans 6:12-23", "Matthew 10:40-42", "Psalm 13"],
        b: ["2 Samuel 1:1,17-27", "2 Corinthians 8:7-15", "Mark 5:21-43", "Psalm 130"],
        c: ["2 Kings 2:1-2,6-14", "Galatians 5:1,13-25", "Luke 9:51-62", "Psalm 77:1-2,11-20"],
    },
    SundayPropers {
        week: "Proper 9",
        a: [
            "Genesis 24:34-38,42-49,58-67",
            "Romans 7:15-25a",
            "Matthew 11:16-19,25-30",
            "Psalm 45:10-17",
        ],
        b: ["2 Samuel 5:1-5,9-10", "2 Corinthians 12:2-10", "Mark 6:1-13", "Psalm 48"],
        c: ["2 Kings 5:1-14", "Galatians 6:1-16", "Luke 10:1-11,16-20", "Psalm 30"],
    },
    SundayPropers {
        week: "Proper 10",
        a: ["Genesis 25:19-34", "Romans 8:1-11", "Matthew 13:1-9,18-23", "Psalm 119:105-112"],
        b: ["2 Samuel 6:1-5,12b-19", "Ephesians 1:3-14", "Mark 6:14-29", "Psalm 24"],
        c: ["Amos 7:7-17", "Colossians 1:1-14", "Luke 10:25-37", "Psalm 82"],
    },
    SundayPropers {
        week: "Proper 11",
        a: [
            "Genesis 28:10-19a",
            "Romans 8:12-25",
            "Matthew 13:24-30,36-43",
            "Psalm 139:1-12,23-24",
        ],
        b: ["2 Samuel 7:1-14a", "Ephesians 2:11-22", "Mark 6:30-34,53-56", "Psalm 89:20-37"],
        c: ["Amos 8:1-12", "Colossians 1:15-28", "Luke 10:38-42", "Psalm 52"],
    },
    SundayPropers {
        week: "Proper 12",
        a: ["Genesis 29:15-28", "Romans 8:26-39", "Matthew 13:31-33,44-52", "Psalm 105:1-11,45b"],
        b: ["2 Samuel 11:1-15", "Ephesians 3:14-21", "John 6:1-21", "Psalm 14"],
        c: ["Hosea 1:2-10", "Colossians 2:6-19", "Luke 11:1-13", "Psalm 85"],
    },
    SundayPropers {
        week: "Proper 13",
        a: ["Genesis 32:22-31", "Romans 9:1-5", "Matthew 14:13-21", "Psalm 17:1-7,15"],
        b: ["2 Samuel 11:26-12:13a", "Ephesians 4:1-16", "John 6:24-35", "Psalm 51:1-12"],
        c: ["Hosea 11:1-11", "Colossians 3:1-11", "Luke 12:13-21", "Psalm 107:1-9,43"],
    },
    SundayPropers {
        week: "Proper 14",
        a: [
            "Genesis 37:1-4,12-28",
            "Romans 10:5-15",
            "Matthew 14:22-33",
            "Psalm 105:1-6,16-22,45b",
        ],
        b: ["2 Samuel 18:5-9,15,31-33", "Ephesians 4:25-5:2", "John 6:35,41-51", "Psalm 130"],
        c: ["Isaiah 1:1,10-20", "Hebrews 11:1-3,8-16", "Luke 12:32-40", "Psalm 50:1-8,22-23"],
    },
    SundayPropers {
        week: "Proper 15",
        a: ["Genesis 45:1-15", "Romans 11:1-2a,29-32", "Matthew 15:10-28", "Psalm 133"],
        b: ["1 Kings 2:10-12,3:3-14", "Ephesians 5:15-20", "John 6:51-58", "Psalm 111"],
        c: ["Isaiah 5:1-7", "Hebrews 11:29-12:2", "Luke 12:49-56", "Psalm 80:1-2,8-19"],
    },
    SundayPropers {
        week: "Proper 16",
        a: ["Exodus 1:8-2:10", "Romans 12:1-8", "Matthew 16:13-20", "Psalm 124"],
        b: ["1 Kings 8:1,6,10-11,22-30,41-43", "Ephesians 6:10-20", "John 6:56-69", "Psalm 84"],
        c: ["Jeremiah 1:4-10", "Hebrews 12:18-29", "Luke 13:10-17", "Psalm 71:1-6"],
    },
    SundayPropers {
        week: "Proper 17",
        a: ["Exodus 3:1-15", "Romans 12:9-21", "Matthew 16:21-28", "Psalm 105:1-6,23-26,45c"],
        b: [
            "Song of Solomon 2:8-13",
            "James 1:17-27",
            "Mark 7:1-8,14-15,21-23",
            "Psalm 45:1-2,6-9",
        ],
        c: ["Jeremiah 2:4-13", "Hebrews 13:1-8,15-16", "Luke 14:1,7-14", "Psalm 81:1,10-16"],
    },
    SundayPropers {
        week: "Proper 18",
        a: ["Exodus 12:1-14", "Romans 13:8-14", "Matthew 18:15-20", "Psalm 149"],
        b: ["Proverbs 22:1-2,8-9,22-23", "James 2:1-10,14-17", "Mark 7:24-37", "Psalm 125"],
        c: ["Jeremiah 18:1-11", "Philemon 1-21", "Luke 14:25-33", "Psalm 139:1-6,13-18"],
    },
    SundayPropers {
        week: "Proper 19",
        a: ["Exodus 14:19-31", "Romans 14:1-12", "Matthew 18:21-35", "Psalm 114"],
        b: ["Proverbs 1:20-33", "James 3:1-12", "Mark 8:27-38", "Psalm 19"],
        c: ["Jeremiah 4:11-12,22-28", "1 Timothy 1:12-17", "Luke 15:1-10", "Psalm 14"],
    },
    SundayPropers {
        week: "Proper 20",
        a: ["Exodus 16:2-15", "Philippians 1:21-30", "Matthew 20:1-16", "Psalm 105:1-6,37-45"],
        b: ["Proverbs 31:10-31", "James 3:13-4:3,7-8a", "Mark 9:30-37", "Psalm 1"],
        c: ["Jeremiah 8:18-9:1", "1 Timothy 2:1-7", "Luke 16:1-13", "Psalm 79:1-9"],
    },
    SundayPropers {
        week: "Proper 21",
        a: ["Exodus 17:1-7", "Philippians 2:1-13", "Matthew 21:23-32", "Psalm 78:1-4,12-16"],
        b: ["Esther 7:1-6,9-10,9:20-22", "James 5:13-20", "Mark 9:38-50", "Psalm 124"],
        c: ["Jeremiah 32:1-3a,6-15", "1 Timothy 6:6-19", "Luke 16:19-31", "Psalm 91:1-6,14-16"],
    },
    SundayPropers {
        week: "Proper 22",
        a: ["Exodus 20:1-4,7-9,12-20", "Philippians 3:4b-14", "Matthew 21:33-46", "Psalm 19"],
        b: ["Job 1:1,2:1-10", "Hebrews 1:1-4,2:5-12", "Mark 10:2-16", "Psalm 26"],
        c: ["Lamentations 1:1-6", "2 Timothy 1:1-14", "Luke 17:5-10", "Psalm 137"],
    },
    SundayPropers {
        week: "Proper 23",
        a: ["Exodus 32:1-14", "Philippians 4:1-9", "Matthew 22:1-14", "Psalm 106:1-6,19-23"],
        b: ["Job 23:1-9,16-17", "Hebrews 4:12-16", "Mark 10:17-31", "Psalm 22:1-15"],
        c: ["Jeremiah 29:1,4-7", "2 Timothy 2:8-15", "Luke 17:11-19", "Psalm 66:1-12"],
    },
    SundayPropers {
        week: "Proper 24",
        a: ["Exodus 33:12-23", "1 Thessalonians 1:1-10", "Matthew 22:15-22", "Psalm 99"],
        b: ["Job 38:1-7,34-41", "Hebrews 5:1-10", "Mark 10:35-45", "Psalm 104:1-9,24,35c"],
        c: ["Jeremiah 31:27-34", "2 Timothy 3:14-4:5", "Luke 18:1-8", "Psalm 119:97-104"],
    },
    SundayPropers {
        week: "Proper 25",
        a: [
            "Deuteronomy 34:1-12",
            "1 Thessalonians 2:1-8",
            "Matthew 22:34-46",
            "Psalm 90:1-6,13-17",
        ],
        b: ["Job 42:1-6,10-17", "Hebrews 7:23-28", "Mark 10:46-52", "Psalm 34:1-8,19-22"],
        c: ["Joel 2:23-32", "2 Timothy 4:6-8,16-18", "Luke 18:9-14", "Psalm 65"],
    },
    SundayPropers {
        week: "Proper 26",
        a: ["Joshua 3:7-17", "1 Thessalonians 2:9-13", "Matthew 23:1-12", "Psalm 107:1-7,33-37"],
        b: ["Ruth 1:1-18", "Hebrews 9:11-14", "Mark 12:28-34", "Psalm 146"],
        c: [
            "Habakkuk 1:1-4,2:1-4",
            "2 Thessalonians 1:1-4,11-12",
            "Luke 19:1-10",
            "Psalm 119:137-144",
        ],
    },
    // ── Sundays before Advent ───────────────────────────────────────────────────
    SundayPropers {
        week: "4 before Advent",
        a: ["Micah 3:5-12", "1 Thessalonians 2:9-13", "Matthew 24:1-14", "Psalm 43"],
        b: ["Deuteronomy 6:1-9", "Hebrews 9:11-14", "Mark 12:28-34", "Psalm 119:1-8"],
        c: ["Isaiah 1:10-18", "2 Thessalonians 1:1-12", "Luke 19:1-10", "Psalm 32:1-8"],
    },
    SundayPropers {
        week: "3 before Advent",
        a: ["Amos 5:18-24", "1 Thessalonians 4:13-18", "Matthew 25:1-13", "Psalm 70"],
        b: ["Jonah 3:1-5,10", "Hebrews 9:24-28", "Mark 1:14-20", "Psalm 62:5-12"],
        c: ["Job 19:23-27a", "2 Thessalonians 2:1-5,13-17", "Luke 20:27-38", "Psalm 17:1-9"],
    },
    SundayPropers {
        week: "2 before Advent",
        a: ["Zephaniah 1:7,12-18", "1 Thessalonians 5:1-11", "Matthew 25:14-30", "Psalm 90:1-8"],
        b: ["Daniel 12:1-3", "Hebrews 10:11-14,19-25", "Mark 13:1-8", "Psalm 16"],
        c: ["Malachi 4:1-2a", "2 Thessalonians 3:6-13", "Luke 21:5-19", "Psalm 98"],
    },
    // Christ the King
    SundayPropers {
        week: "1 before Advent",
        a: ["Ezekiel 34:11-16,20-24", "Ephesians 1:15-23", "Matthew 25:31-46", "Psalm 95:1-7"],
        b: ["Daniel 7:9-10,13-14", "Revelation 1:4b-8", "John 18:33-37", "Psalm 93"],
        c: ["Jeremiah 23:1-6", "Colossians 1:11-20", "Luke 23:33-43", "Psalm 46"],
    },
];
