//! Interactive query loop.
//!
//! Prompts for a point name, a radius and a metric, prints the report and
//! starts over. Entering `0` as the point name (or closing the input) ends
//! the session.
//!
//! Input and output are generic so the loop can be driven from tests.

use std::io::{self, BufRead, Write};

use super::dataset::is_valid_name;
use super::report::SearchReport;
use crate::core::Metric;
use crate::ports::Near;

const EXIT_COMMAND: &str = "0";

const NAME_PROMPT: &str = "Please enter the selected city name (with a line break after it):";
const RADIUS_PROMPT: &str = "Please enter the desired radius:";
const METRIC_PROMPT: &str = "Please enter the desired norm (0 - L2, Euclidean distance, \
     1 - Linf, Chebyshev distance, 2 - L1, Manhattan distance):";

/// Run the prompt loop until the user exits or input ends
pub fn run<N, R, W>(engine: &N, mut input: R, output: &mut W) -> io::Result<()>
where
    N: Near + ?Sized,
    R: BufRead,
    W: Write,
{
    loop {
        let Some(name) = prompt_name(&mut input, output)? else {
            break;
        };
        let Some(radius) = prompt_radius(&mut input, output)? else {
            break;
        };
        let Some(metric) = prompt_metric(&mut input, output)? else {
            break;
        };

        let outcome = engine
            .search_with(&name, radius, metric)
            .and_then(|ranked| SearchReport::build(engine, &name, &ranked));

        match outcome {
            Ok(report) => writeln!(output, "\n{report}")?,
            Err(e) => {
                tracing::debug!(error = %e, "Query failed");
                writeln!(output, "\nError: {e}\n")?;
            }
        }
    }

    writeln!(output, "\nBye")?;
    output.flush()
}

/// Read one line, without its line terminator. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn prompt_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Option<String>> {
    writeln!(output, "{NAME_PROMPT}")?;
    output.flush()?;

    loop {
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        if line == EXIT_COMMAND {
            return Ok(None);
        }
        if is_valid_name(&line) {
            return Ok(Some(line));
        }
        writeln!(output, "Invalid city name. {NAME_PROMPT}")?;
        output.flush()?;
    }
}

fn prompt_radius<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Option<f64>> {
    writeln!(output, "\n{RADIUS_PROMPT}")?;
    output.flush()?;

    loop {
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.trim().parse::<f64>() {
            Ok(radius) => return Ok(Some(radius)),
            Err(_) => {
                writeln!(output, "Invalid radius. {RADIUS_PROMPT}")?;
                output.flush()?;
            }
        }
    }
}

fn prompt_metric<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Metric>> {
    writeln!(output, "\n{METRIC_PROMPT}")?;
    output.flush()?;

    loop {
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        let metric = line
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|code| Metric::from_code(code).ok());
        match metric {
            Some(metric) => return Ok(Some(metric)),
            None => {
                writeln!(output, "Invalid norm. {METRIC_PROMPT}")?;
                output.flush()?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{PointRegistry, ProximitySearchEngine};
    use crate::core::Coordinates;
    use crate::ports::Place;
    use std::io::Cursor;

    fn setup_registry() -> PointRegistry {
        let mut registry = PointRegistry::new();
        registry.add("A", Coordinates::new(0.0, 0.0));
        registry.add("B", Coordinates::new(0.0, 5.0));
        registry.add("C", Coordinates::new(0.0, -5.0));
        registry.add("D", Coordinates::new(3.0, 4.0));
        registry
    }

    fn drive(script: &str) -> String {
        let registry = setup_registry();
        let engine = ProximitySearchEngine::new(&registry);
        let mut output = Vec::new();
        run(&engine, Cursor::new(script), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_single_query_then_exit() {
        let output = drive("A\n5\n0\n0\n");

        assert!(output.contains("3 city/cities found in the given radius."));
        assert!(output.contains("1 cities are to the north of the selected city."));
        assert!(output.contains("City list:\nB\nC\nD\n"));
        assert!(output.ends_with("\nBye\n"));
    }

    #[test]
    fn test_invalid_inputs_are_reprompted() {
        let output = drive("A1\nA\nfar\n4\n7\n1\n0\n");

        assert!(output.contains("Invalid city name."));
        assert!(output.contains("Invalid radius."));
        assert!(output.contains("Invalid norm."));
        // Chebyshev radius 4 around A only reaches D
        assert!(output.contains("1 city/cities found in the given radius."));
        assert!(output.contains("City list:\nD\n"));
    }

    #[test]
    fn test_unknown_point_keeps_session_alive() {
        let output = drive("Z\n5\n0\nA\n0\n0\n0\n");

        assert!(output.contains("Error: unknown point: Z"));
        assert!(output.contains("0 city/cities found in the given radius."));
        assert!(output.ends_with("\nBye\n"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let output = drive("A\n");
        assert!(output.ends_with("\nBye\n"));
        assert!(!output.contains("Search result:"));
    }

    #[test]
    fn test_immediate_exit() {
        let output = drive("0\n");
        assert!(output.starts_with(NAME_PROMPT));
        assert!(output.ends_with("\nBye\n"));
    }
}
