//! Fixture records loaded at startup.
//!
//! Fifty tasks and fifty users. Seeding goes through `create`, so fixture
//! ids are assigned by the store rather than listed here.

use crate::domain::{Task, Timestamp, User};
use crate::infrastructure::{InMemoryRecordRepository, RecordRepository};

/// (description, date, done)
type TaskFixture = (&'static str, &'static str, bool);

/// (staff id, name, created, joined, enabled, email)
type UserFixture = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    bool,
    &'static str,
);

const TASKS: [TaskFixture; 50] = [
    ("Review quarterly budget report", "2024-10-01T09:00", true),
    ("Schedule team meeting for project kickoff", "2024-10-02T10:30", true),
    ("Update client presentation slides", "2024-10-03T14:00", true),
    ("Fix bug in authentication module", "2024-10-04T11:15", false),
    ("Prepare training materials for new hires", "2024-10-05T13:30", true),
    ("Review pull requests from development team", "2024-10-06T15:45", false),
    ("Conduct performance review with team members", "2024-10-07T09:30", true),
    ("Research new project management tools", "2024-10-08T12:00", false),
    ("Update documentation for API endpoints", "2024-10-09T10:00", true),
    ("Organize team building activity", "2024-10-10T16:00", false),
    ("Respond to customer support tickets", "2024-10-11T08:30", true),
    ("Optimize database queries for performance", "2024-10-12T14:30", false),
    ("Create social media content calendar", "2024-10-13T11:00", true),
    ("Audit security protocols", "2024-10-14T13:15", false),
    ("Plan Q4 marketing campaign", "2024-10-15T10:45", true),
    ("Review and approve expense reports", "2024-10-16T09:00", true),
    ("Coordinate with design team on new logo", "2024-10-17T15:30", false),
    ("Test new feature in staging environment", "2024-10-18T12:45", true),
    ("Write blog post about industry trends", "2024-10-19T14:00", false),
    ("Attend virtual conference on AI developments", "2024-10-20T09:30", true),
    ("Update employee handbook", "2024-10-21T11:30", false),
    ("Schedule equipment maintenance", "2024-10-22T08:00", true),
    ("Prepare monthly financial report", "2024-10-23T13:00", false),
    ("Conduct user testing session", "2024-10-24T10:15", true),
    ("Review competitor analysis report", "2024-10-25T15:00", false),
    ("Set up automated backup system", "2024-10-26T09:45", true),
    ("Draft partnership proposal", "2024-10-27T12:30", false),
    ("Organize office supply inventory", "2024-10-28T14:15", true),
    ("Review and update privacy policy", "2024-10-29T11:00", false),
    ("Create onboarding checklist for new employees", "2024-10-30T10:00", true),
    ("Analyze website traffic metrics", "2024-10-31T13:45", false),
    ("Implement two-factor authentication", "2024-11-01T09:15", true),
    ("Schedule server maintenance window", "2024-11-02T15:30", false),
    ("Create customer satisfaction survey", "2024-11-03T12:00", true),
    ("Update product roadmap", "2024-11-04T10:30", false),
    ("Negotiate vendor contracts", "2024-11-05T14:45", true),
    ("Design email newsletter template", "2024-11-06T11:15", false),
    ("Conduct security training session", "2024-11-07T09:00", true),
    ("Review code standards and best practices", "2024-11-08T13:30", false),
    ("Plan holiday office party", "2024-11-09T16:00", true),
    ("Update disaster recovery plan", "2024-11-10T08:30", false),
    ("Create video tutorial for product features", "2024-11-11T12:15", true),
    ("Review insurance coverage options", "2024-11-12T14:00", false),
    ("Optimize mobile app performance", "2024-11-13T10:45", true),
    ("Conduct employee satisfaction survey", "2024-11-14T09:30", false),
    ("Prepare investor presentation", "2024-11-15T15:15", true),
    ("Implement A/B testing framework", "2024-11-16T11:30", false),
    ("Review cloud infrastructure costs", "2024-11-17T13:00", true),
    ("Update terms of service document", "2024-11-18T10:00", false),
    ("Plan year-end company retreat", "2024-11-19T14:30", true),
];

const USERS: [UserFixture; 50] = [
    (
        "STF001",
        "Alice Johnson",
        "2023-01-15T09:00",
        "2023-02-01T09:00",
        true,
        "alice.johnson@company.com",
    ),
    ("STF002", "Bob Smith", "2023-01-20T10:30", "2023-02-05T10:30", true, "bob.smith@company.com"),
    (
        "STF003",
        "Carol White",
        "2023-02-10T11:15",
        "2023-03-01T11:15",
        true,
        "carol.white@company.com",
    ),
    (
        "STF004",
        "David Brown",
        "2023-02-15T14:00",
        "2023-03-05T14:00",
        false,
        "david.brown@company.com",
    ),
    (
        "STF005",
        "Emma Davis",
        "2023-03-01T08:30",
        "2023-03-15T08:30",
        true,
        "emma.davis@company.com",
    ),
    (
        "STF006",
        "Frank Miller",
        "2023-03-10T13:45",
        "2023-04-01T13:45",
        true,
        "frank.miller@company.com",
    ),
    (
        "STF007",
        "Grace Wilson",
        "2023-03-20T09:20",
        "2023-04-10T09:20",
        true,
        "grace.wilson@company.com",
    ),
    (
        "STF008",
        "Henry Moore",
        "2023-04-05T10:00",
        "2023-04-20T10:00",
        true,
        "henry.moore@company.com",
    ),
    (
        "STF009",
        "Isla Taylor",
        "2023-04-15T11:30",
        "2023-05-01T11:30",
        false,
        "isla.taylor@company.com",
    ),
    (
        "STF010",
        "Jack Anderson",
        "2023-05-01T15:00",
        "2023-05-15T15:00",
        true,
        "jack.anderson@company.com",
    ),
    (
        "STF011",
        "Kate Thomas",
        "2023-05-10T09:45",
        "2023-06-01T09:45",
        true,
        "kate.thomas@company.com",
    ),
    (
        "STF012",
        "Liam Jackson",
        "2023-05-20T12:00",
        "2023-06-05T12:00",
        true,
        "liam.jackson@company.com",
    ),
    (
        "STF013",
        "Mia Martin",
        "2023-06-01T08:15",
        "2023-06-15T08:15",
        true,
        "mia.martin@company.com",
    ),
    ("STF014", "Noah Lee", "2023-06-10T14:30", "2023-07-01T14:30", false, "noah.lee@company.com"),
    (
        "STF015",
        "Olivia Harris",
        "2023-06-20T10:45",
        "2023-07-10T10:45",
        true,
        "olivia.harris@company.com",
    ),
    (
        "STF016",
        "Paul Clark",
        "2023-07-01T09:00",
        "2023-07-20T09:00",
        true,
        "paul.clark@company.com",
    ),
    (
        "STF017",
        "Quinn Lewis",
        "2023-07-15T13:00",
        "2023-08-01T13:00",
        true,
        "quinn.lewis@company.com",
    ),
    (
        "STF018",
        "Rachel Walker",
        "2023-08-01T11:30",
        "2023-08-15T11:30",
        true,
        "rachel.walker@company.com",
    ),
    ("STF019", "Sam Hall", "2023-08-10T15:15", "2023-09-01T15:15", false, "sam.hall@company.com"),
    (
        "STF020",
        "Tina Allen",
        "2023-08-25T09:30",
        "2023-09-10T09:30",
        true,
        "tina.allen@company.com",
    ),
    ("STF021", "Uma Young", "2023-09-05T12:45", "2023-09-20T12:45", true, "uma.young@company.com"),
    (
        "STF022",
        "Victor King",
        "2023-09-15T08:00",
        "2023-10-01T08:00",
        true,
        "victor.king@company.com",
    ),
    (
        "STF023",
        "Wendy Wright",
        "2023-10-01T14:00",
        "2023-10-15T14:00",
        true,
        "wendy.wright@company.com",
    ),
    (
        "STF024",
        "Xavier Scott",
        "2023-10-10T10:30",
        "2023-11-01T10:30",
        false,
        "xavier.scott@company.com",
    ),
    (
        "STF025",
        "Yara Green",
        "2023-10-20T13:15",
        "2023-11-05T13:15",
        true,
        "yara.green@company.com",
    ),
    (
        "STF026",
        "Zack Adams",
        "2023-11-01T09:00",
        "2023-11-15T09:00",
        true,
        "zack.adams@company.com",
    ),
    ("STF027", "Amy Baker", "2023-11-10T11:45", "2023-12-01T11:45", true, "amy.baker@company.com"),
    (
        "STF028",
        "Ben Nelson",
        "2023-11-20T15:30",
        "2023-12-10T15:30",
        true,
        "ben.nelson@company.com",
    ),
    (
        "STF029",
        "Chloe Carter",
        "2023-12-01T08:45",
        "2023-12-20T08:45",
        false,
        "chloe.carter@company.com",
    ),
    (
        "STF030",
        "Dylan Mitchell",
        "2023-12-10T12:00",
        "2024-01-05T12:00",
        true,
        "dylan.mitchell@company.com",
    ),
    ("STF031", "Eva Perez", "2024-01-05T09:15", "2024-01-20T09:15", true, "eva.perez@company.com"),
    (
        "STF032",
        "Finn Roberts",
        "2024-01-15T14:45",
        "2024-02-01T14:45",
        true,
        "finn.roberts@company.com",
    ),
    (
        "STF033",
        "Gina Turner",
        "2024-02-01T10:00",
        "2024-02-15T10:00",
        true,
        "gina.turner@company.com",
    ),
    (
        "STF034",
        "Hugo Phillips",
        "2024-02-10T13:30",
        "2024-03-01T13:30",
        false,
        "hugo.phillips@company.com",
    ),
    (
        "STF035",
        "Ivy Campbell",
        "2024-02-20T11:00",
        "2024-03-10T11:00",
        true,
        "ivy.campbell@company.com",
    ),
    (
        "STF036",
        "Jake Parker",
        "2024-03-01T08:30",
        "2024-03-20T08:30",
        true,
        "jake.parker@company.com",
    ),
    (
        "STF037",
        "Kara Evans",
        "2024-03-15T15:00",
        "2024-04-01T15:00",
        true,
        "kara.evans@company.com",
    ),
    (
        "STF038",
        "Leo Edwards",
        "2024-04-01T09:45",
        "2024-04-20T09:45",
        true,
        "leo.edwards@company.com",
    ),
    (
        "STF039",
        "Maya Collins",
        "2024-04-10T12:30",
        "2024-05-01T12:30",
        false,
        "maya.collins@company.com",
    ),
    (
        "STF040",
        "Nate Stewart",
        "2024-04-25T14:15",
        "2024-05-15T14:15",
        true,
        "nate.stewart@company.com",
    ),
    (
        "STF041",
        "Opal Sanchez",
        "2024-05-05T10:00",
        "2024-06-01T10:00",
        true,
        "opal.sanchez@company.com",
    ),
    (
        "STF042",
        "Pete Morris",
        "2024-05-20T11:30",
        "2024-06-10T11:30",
        true,
        "pete.morris@company.com",
    ),
    (
        "STF043",
        "Quincy Rogers",
        "2024-06-01T13:00",
        "2024-06-20T13:00",
        true,
        "quincy.rogers@company.com",
    ),
    ("STF044", "Rose Reed", "2024-06-15T09:30", "2024-07-01T09:30", false, "rose.reed@company.com"),
    (
        "STF045",
        "Steve Cook",
        "2024-07-01T15:45",
        "2024-07-20T15:45",
        true,
        "steve.cook@company.com",
    ),
    (
        "STF046",
        "Tara Morgan",
        "2024-07-15T08:00",
        "2024-08-01T08:00",
        true,
        "tara.morgan@company.com",
    ),
    (
        "STF047",
        "Ulysses Bell",
        "2024-08-01T12:15",
        "2024-08-20T12:15",
        true,
        "ulysses.bell@company.com",
    ),
    (
        "STF048",
        "Vera Murphy",
        "2024-08-15T14:00",
        "2024-09-01T14:00",
        true,
        "vera.murphy@company.com",
    ),
    (
        "STF049",
        "Wade Bailey",
        "2024-09-01T10:45",
        "2024-09-20T10:45",
        false,
        "wade.bailey@company.com",
    ),
    (
        "STF050",
        "Xena Rivera",
        "2024-09-15T13:30",
        "2024-10-01T13:30",
        true,
        "xena.rivera@company.com",
    ),
];

/// Returns the fixture tasks in seed order, ids unassigned.
pub fn fixture_tasks() -> Vec<Task> {
    TASKS
        .iter()
        .enumerate()
        .filter_map(|(position, &(description, date, done))| {
            let date = fixture_date("Todo", position, date)?;
            Some(Task::new(description, date, done))
        })
        .collect()
}

/// Returns the fixture users in seed order, ids unassigned.
pub fn fixture_users() -> Vec<User> {
    USERS
        .iter()
        .enumerate()
        .filter_map(|(position, &(staff_id, name, created, joined, enabled, email))| {
            Some(User {
                id: 0,
                staff_id: staff_id.to_string(),
                name: name.to_string(),
                created: fixture_date("User", position, created)?,
                joined: fixture_date("User", position, joined)?,
                enabled,
                email: email.to_string(),
            })
        })
        .collect()
}

/// Parses a fixture date, logging the fixture it skips on failure.
///
/// A skipped fixture shifts the id of every later one.
fn fixture_date(kind: &'static str, position: usize, raw: &str) -> Option<Timestamp> {
    Timestamp::parse(raw)
        .inspect_err(|error| {
            tracing::warn!(kind, position, %error, "Skipping fixture with unparseable date");
        })
        .ok()
}

/// Creates a task repository holding the fixture tasks.
pub fn seeded_tasks() -> InMemoryRecordRepository<Task> {
    let repository = InMemoryRecordRepository::from_records(fixture_tasks());
    tracing::info!(count = repository.count(), "Seeded tasks");
    repository
}

/// Creates a user repository holding the fixture users.
pub fn seeded_users() -> InMemoryRecordRepository<User> {
    let repository = InMemoryRecordRepository::from_records(fixture_users());
    tracing::info!(count = repository.count(), "Seeded users");
    repository
}
