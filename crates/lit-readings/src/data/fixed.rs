//! Weekday propers tied to the calendar date rather than the week.
//!
//! Late Advent and the twelve days of Christmas through the week after the
//! Epiphany.

use lit_time::MonthDay;

use super::FixedPropers;

/// Fixed-date weekday readings.
pub static FIXED_WEEKDAY_READINGS: &[FixedPropers] = &[
    FixedPropers {
        date: MonthDay::new_unchecked(12, 17),
        cycle: None,
        readings: ["Genesis 49:2,8-10", "Matthew 1:1-17"],
    },
    FixedPropers {
        date: MonthDay::new_unchecked(12, 18),
        cycle: None,
        readings: ["Jeremiah 23:5-8", "Matthew 1:18-24"],
    },
    FixedPropers {
        date: MonthDay::new_unchecked(12, 19),
        cycle: None,
        readings: ["Judges 13:2-7,24-25a", "Luke 1:5-25"],
    },
    FixedPropers {
        date: MonthDay::new_unchecked(12, 20),
        cycle: None,
        readings: ["Isaiah 7:10-14", "Luke 1:26-38"],
    },
    FixedPropers {
        date: MonthDay::new_unchecked(12, 21),
        cycle: None,
        readings: ["Zephaniah 3:14-18", "Luke 1:39-45"],
    },
    FixedPropers {
        date: MonthDay::new_unchecked(12, 22),
        cycle: None,
        readings: ["1 Samuel 1:24-28", "Luke 1:46-56"],
    },
    FixedPropers {
        date: MonthDay::new_unchecked(12, 23),
        cycle: None,
        readings: ["Malachi 3:1-4,4:5-6", "Luke 1:57-66"],
    },
    FixedPropers {
        date: MonthDay::new_unchecked(12, 24),
        cycle: None,
        readings: ["2 Samuel 7:1-5,8b-12,14a,16", "Luke 1:67-79"],
    },
    FixedPropers {
        date: MonthDay::new_unchecked(12, 29),
        cycle: None,
        readings: ["1 John 2:3-11", "Luke 2:22-35"],
    },
    FixedPropers {
        date: MonthDay::new_unchecked(12, 30),
        cycle: None,
        readings: ["1 John 2:12-17", "Luke 2:36-40"],
    },
    FixedPropers {
        date: MonthDay::new_unchecked(12, 31),
        cycle: None,
        readings: ["1 John 2:18-21", "John 1:1-18"],
    },
    FixedPropers {
        date: MonthDay::new_unchecked(1, 2),
        cycle: None,
        readings: ["1 John 2:22-28", "John 1:19-28"],
    },
    FixedPropers {
        date: MonthDay::new_unchecked(1, 3),
        cycle: None,
        readings: ["1 John 2:29-3:6", "John 1:29-34"],
    },
    FixedPropers {
        date: MonthDay::new_unchecked(1, 4),
        cycle: None,
        readings: ["1 John 3:7-10", "John 1:35-42"],
    },
    FixedPropers {
        date: MonthDay::new_unchecked(1, 5),
        cycle: None,
        readings: ["1 John 3:11-21", "John 1:43-51"],
    },
    FixedPropers {
        date: MonthDay::new_unchecked(1, 7),
        cycle: None,
        readings: ["1 John 3:22-4:6", "Matthew 4:12-17,23-25"],
    },
    FixedPropers {
        date: MonthDay::new_unchecked(1, 8),
        cycle: None,
        readings: ["1 John 4:7-10", "Mark 6:34-44"],
    },
    FixedPropers {
        date: MonthDay::new_unchecked(1, 9),
        cycle: None,
        readings: ["1 John 4:11-18", "Mark 6:45-52"],
    },
    FixedPropers {
        date: MonthDay::new_unchecked(1, 10),
        cycle: None,
        readings: ["1 John 4:19-5:4", "Luke 4:14-22a"],
    },
    FixedPropers {
        date: MonthDay::new_unchecked(1, 11),
        cycle: None,
        readings: ["1 John 5:5-13", "Luke 5:12-16"],
    },
    FixedPropers {
        date: MonthDay::new_unchecked(1, 12),
        cycle: None,
        readings: ["1 John 5:14-21", "John 3:22-30"],
    },
];
