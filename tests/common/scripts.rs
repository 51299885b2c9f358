//! Scenario scripts shared by the regular and interruption suites

use resumable_calc::interpreter::{HELP_TABLE, NO_SUCH_COMMAND};

use super::Action::{self, Read, Write};

pub type Script = Vec<(Action, &'static str)>;

fn help_banner() -> Script {
    vec![
        (Read, "help"),
        (Write, HELP_TABLE.intro),
        (Write, HELP_TABLE.command_list),
        (Write, HELP_TABLE.exit_hint),
    ]
}

fn help_topic(topic: &'static str) -> Script {
    let text = HELP_TABLE
        .describe(topic)
        .unwrap_or_else(|| panic!("no help text for {topic}"));
    vec![(Read, topic), (Write, text), (Write, HELP_TABLE.exit_hint)]
}

fn help_unknown(topic: &'static str) -> Script {
    vec![
        (Read, topic),
        (Write, HELP_TABLE.unknown_topic),
        (Write, HELP_TABLE.command_list),
        (Write, HELP_TABLE.exit_hint),
    ]
}

fn help_end() -> Script {
    vec![(Read, "end")]
}

fn exit() -> Script {
    vec![(Read, "exit")]
}

fn concat(parts: Vec<Script>) -> Script {
    parts.into_iter().flatten().collect()
}

pub fn exit_only() -> Script {
    exit()
}

pub fn add() -> Script {
    vec![
        (Read, "add"),
        (Read, "15"),
        (Read, "60"),
        (Write, "75"),
        (Read, "exit"),
    ]
}

pub fn odd_median() -> Script {
    vec![
        (Read, "median"),
        (Read, "5"),
        (Read, "17"),
        (Read, "30"),
        (Read, "29"),
        (Read, "23"),
        (Read, "20"),
        (Write, "23"),
        (Read, "exit"),
    ]
}

pub fn even_median() -> Script {
    vec![
        (Read, "median"),
        (Read, "6"),
        (Read, "17"),
        (Read, "30"),
        (Read, "29"),
        (Read, "23"),
        (Read, "20"),
        (Read, "24"),
        (Write, "23.5"),
        (Read, "exit"),
    ]
}

pub fn short_median() -> Script {
    vec![
        (Read, "median"),
        (Read, "3"),
        (Read, "60"),
        (Read, "50"),
        (Read, "41"),
        (Write, "50"),
        (Read, "exit"),
    ]
}

pub fn zero_median() -> Script {
    vec![(Read, "median"), (Read, "0"), (Write, "0"), (Read, "exit")]
}

pub fn rand_once() -> Script {
    vec![(Read, "rand"), (Read, "1"), (Write, "420"), (Read, "exit")]
}

pub fn rand_pair() -> Script {
    vec![
        (Read, "rand"),
        (Read, "2"),
        (Write, "420"),
        (Write, "7058940"),
        (Read, "exit"),
    ]
}

pub fn rand_three_times() -> Script {
    vec![
        (Read, "rand"),
        (Read, "1"),
        (Write, "420"),
        (Read, "rand"),
        (Read, "2"),
        (Write, "7058940"),
        (Write, "528003995"),
        (Read, "rand"),
        (Read, "3"),
        (Write, "760714561"),
        (Write, "1359476136"),
        (Write, "1636897319"),
        (Read, "exit"),
    ]
}

pub fn many_rand() -> Script {
    vec![
        (Read, "rand"),
        (Read, "6"),
        (Write, "420"),
        (Write, "7058940"),
        (Write, "528003995"),
        (Write, "760714561"),
        (Write, "1359476136"),
        (Write, "1636897319"),
        (Read, "exit"),
    ]
}

pub fn rand_median_rand() -> Script {
    vec![
        (Read, "rand"),
        (Read, "3"),
        (Write, "420"),
        (Write, "7058940"),
        (Write, "528003995"),
        (Read, "median"),
        (Read, "3"),
        (Read, "60"),
        (Read, "50"),
        (Read, "41"),
        (Write, "50"),
        (Read, "rand"),
        (Read, "3"),
        (Write, "760714561"),
        (Write, "1359476136"),
        (Write, "1636897319"),
        (Read, "exit"),
    ]
}

pub fn unknown_command() -> Script {
    vec![(Read, "ramd"), (Write, NO_SUCH_COMMAND), (Read, "exit")]
}

pub fn empty_help() -> Script {
    concat(vec![help_banner(), help_end(), exit()])
}

pub fn topic_help(topic: &'static str) -> Script {
    concat(vec![help_banner(), help_topic(topic), help_end(), exit()])
}

pub fn unknown_help() -> Script {
    concat(vec![help_banner(), help_unknown("media"), help_end(), exit()])
}

pub fn several_topics_help() -> Script {
    concat(vec![
        help_banner(),
        help_unknown("media"),
        help_topic("add"),
        help_topic("rand"),
        help_topic("median"),
        help_end(),
        exit(),
    ])
}

pub fn mixed_session() -> Script {
    concat(vec![
        vec![
            (Read, "rand"),
            (Read, "2"),
            (Write, "420"),
            (Write, "7058940"),
            (Read, "add"),
            (Read, "2"),
            (Read, "3"),
            (Write, "5"),
            (Read, "rand"),
            (Read, "2"),
            (Write, "528003995"),
            (Write, "760714561"),
            (Read, "rand"),
            (Read, "2"),
            (Write, "1359476136"),
            (Write, "1636897319"),
        ],
        help_banner(),
        help_end(),
        vec![(Read, "add"), (Read, "2"), (Read, "3"), (Write, "5")],
        exit(),
    ])
}

/// Every named scenario, for suites that sweep all of them
pub fn all() -> Vec<(&'static str, Script)> {
    vec![
        ("exit", exit_only()),
        ("add", add()),
        ("odd median", odd_median()),
        ("even median", even_median()),
        ("short median", short_median()),
        ("zero median", zero_median()),
        ("rand once", rand_once()),
        ("rand pair", rand_pair()),
        ("rand three times", rand_three_times()),
        ("many rand", many_rand()),
        ("rand median rand", rand_median_rand()),
        ("unknown command", unknown_command()),
        ("empty help", empty_help()),
        ("add help", topic_help("add")),
        ("median help", topic_help("median")),
        ("rand help", topic_help("rand")),
        ("unknown help", unknown_help()),
        ("several topics help", several_topics_help()),
        ("mixed session", mixed_session()),
    ]
}
