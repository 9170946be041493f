use crate::domain::coords::Coords;
use crate::domain::workout_kind::WorkoutKind;
use crate::error::TrackerError;

pub const HELP: &'static str = "Commands:
  click <lat> <lng>                         select a location on the map
  type <running|cycling>                    change the workout type
  submit <distance> <duration> <extra>      create a workout (extra is cadence or elevation gain)
  select <id>                               move the map to a workout
  list                                      print all workouts
  reset                                     delete all workouts and restart
  quit";

/// One line of console input, standing in for a UI event
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Click(Coords),
    Kind(WorkoutKind),
    Submit { distance: String, duration: String, extra: String },
    Select(String),
    List,
    Reset,
    Help,
    Quit
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, TrackerError> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default().to_ascii_lowercase();
        let args: Vec<&str> = words.collect();
        let invalid = || TrackerError::InvalidCommand(line.trim().to_string());
        match (name.as_str(), args.as_slice()) {
            ("click", [lat, lng]) => {
                let lat = lat.parse::<f64>().map_err(|_| invalid())?;
                let lng = lng.parse::<f64>().map_err(|_| invalid())?;
                Ok(Command::Click(Coords::new(lat, lng)))
            }
            ("type", [kind]) => Ok(Command::Kind(kind.parse()?)),
            // Omitted fields are submitted as empty strings, like blank form inputs
            ("submit", fields) if fields.len() <= 3 => {
                let field = |i: usize| fields.get(i).map(|f| f.to_string()).unwrap_or_default();
                Ok(Command::Submit { distance: field(0), duration: field(1), extra: field(2) })
            }
            ("select", [id]) => Ok(Command::Select(id.to_string())),
            ("list", []) => Ok(Command::List),
            ("reset", []) => Ok(Command::Reset),
            ("help", _) => Ok(Command::Help),
            ("quit", []) | ("exit", []) => Ok(Command::Quit),
            _ => Err(invalid())
        }
    }
}
