use crate::bench::Result;
use crate::traversal::Order;
use crate::OrderedSet;
use log::{debug, error, info};
use serde_derive::Serialize;
use std::convert::TryFrom;
use std::io::Write;
use std::time::{Duration, Instant};

/// Timings and final shape of one tree over one record stream.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Timing {
    pub tree: &'static str,
    pub insert_ns: u64,
    pub search_ns: u64,
    pub remove_ns: u64,
    pub found: bool,
    pub removed: bool,
    pub len: usize,
    pub height: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<String>,
}

/// The keys of one tree after the removal, in the requested order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TraversalDump {
    pub tree: &'static str,
    pub order: String,
    pub keys: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StreamReport {
    pub stream: &'static str,
    pub records: usize,
    pub search_key: String,
    pub remove_key: String,
    pub timings: Vec<Timing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traversals: Option<Vec<TraversalDump>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub streams: Vec<StreamReport>,
}

fn nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

/// Builds an `S` from `titles`, then times inserting every title, searching for `search_key`, and
/// removing `remove_key`. Key allocation happens outside the timed sections.
pub fn measure<S>(
    titles: &[String],
    search_key: &str,
    remove_key: &str,
    show: Option<Order>,
) -> (Timing, Option<TraversalDump>)
where
    S: OrderedSet<String> + Default,
{
    let mut set = S::default();
    let keys = titles.to_vec();
    let search_key = search_key.to_string();
    let remove_key = remove_key.to_string();

    let start = Instant::now();
    for key in keys {
        set.insert(key);
    }
    let insert_ns = nanos(start.elapsed());
    debug!("{}: inserted {} keys in {} ns", S::NAME, set.len(), insert_ns);

    let start = Instant::now();
    let found = set.contains(&search_key);
    let search_ns = nanos(start.elapsed());

    let start = Instant::now();
    let removed = set.remove(&remove_key);
    let remove_ns = nanos(start.elapsed());

    let violation = match set.validate() {
        Ok(()) => None,
        Err(violation) => {
            error!("{} is corrupt: {}", S::NAME, violation);
            Some(violation.to_string())
        },
    };

    let dump = show.map(|order| TraversalDump {
        tree: S::NAME,
        order: order.to_string(),
        keys: set.traverse(order).cloned().collect(),
    });

    let timing = Timing {
        tree: S::NAME,
        insert_ns,
        search_ns,
        remove_ns,
        found,
        removed,
        len: set.len(),
        height: set.height(),
        violation,
    };
    info!(
        "{}: {} keys, height {}, found {}, removed {}",
        S::NAME,
        timing.len,
        timing.height,
        timing.found,
        timing.removed,
    );
    (timing, dump)
}

impl Report {
    /// Writes the report as the lines of text a person reads at a terminal.
    pub fn write_text<W>(&self, out: &mut W) -> Result<()>
    where
        W: Write,
    {
        for stream in &self.streams {
            writeln!(out, "Inserting into {} trees...", stream.stream)?;
            for timing in &stream.timings {
                writeln!(
                    out,
                    " Time taken to insert into {}: {} nanoseconds",
                    timing.tree, timing.insert_ns,
                )?;
            }
            writeln!(out)?;

            writeln!(
                out,
                "Searching {} trees for '{}'...",
                stream.stream, stream.search_key,
            )?;
            for timing in &stream.timings {
                writeln!(
                    out,
                    " Time taken to search in {}: {} nanoseconds",
                    timing.tree, timing.search_ns,
                )?;
            }
            writeln!(out)?;

            writeln!(
                out,
                "Removing '{}' from {} trees...",
                stream.remove_key, stream.stream,
            )?;
            for timing in &stream.timings {
                writeln!(
                    out,
                    " Time taken to remove from {}: {} nanoseconds",
                    timing.tree, timing.remove_ns,
                )?;
            }
            writeln!(out)?;

            for timing in &stream.timings {
                write!(
                    out,
                    " {}: {} records, height {}",
                    timing.tree, timing.len, timing.height,
                )?;
                if let Some(violation) = &timing.violation {
                    write!(out, " (invalid: {})", violation)?;
                }
                writeln!(out)?;
            }
            writeln!(out)?;

            if let Some(traversals) = &stream.traversals {
                for dump in traversals {
                    writeln!(out, "{} traversal of {}:", dump.order, dump.tree)?;
                    for key in &dump.keys {
                        writeln!(out, " {}", key)?;
                    }
                    writeln!(out)?;
                }
            }
        }
        Ok(())
    }

    /// Writes the report as pretty printed JSON.
    pub fn write_json<W>(&self, out: &mut W) -> Result<()>
    where
        W: Write,
    {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{measure, Report, StreamReport};
    use crate::avl_tree::AvlSet;
    use crate::binary_tree::BinarySet;
    use crate::red_black_tree::RedBlackSet;
    use crate::Order;

    fn titles() -> Vec<String> {
        ["Dune", "Solaris", "War of the Worlds", "Hyperion", "Neuromancer"]
            .iter()
            .map(|title| title.to_string())
            .collect()
    }

    #[test]
    fn test_measure() {
        let (timing, dump) =
            measure::<AvlSet<String>>(&titles(), "The Maze Runner", "War of the Worlds", None);
        assert_eq!(timing.tree, "AVL tree");
        assert!(!timing.found);
        assert!(timing.removed);
        assert_eq!(timing.len, 4);
        assert_eq!(timing.height, 3);
        assert_eq!(timing.violation, None);
        assert_eq!(dump, None);
    }

    #[test]
    fn test_measure_show() {
        let (timing, dump) =
            measure::<RedBlackSet<String>>(&titles(), "Dune", "Missing", Some(Order::In));
        assert!(timing.found);
        assert!(!timing.removed);
        assert_eq!(timing.len, 5);

        let dump = dump.unwrap();
        assert_eq!(dump.tree, "RedBlack tree");
        assert_eq!(dump.order, "in-order");
        assert_eq!(
            dump.keys,
            vec!["Dune", "Hyperion", "Neuromancer", "Solaris", "War of the Worlds"],
        );
    }

    #[test]
    fn test_sorted_binary_height() {
        let mut sorted = titles();
        sorted.sort();
        let (timing, _) = measure::<BinarySet<String>>(&sorted, "Dune", "Dune", None);
        // removing the root of a right-leaning chain shortens it by one
        assert_eq!(timing.height, 4);
    }

    fn report() -> Report {
        let titles = titles();
        let (binary, _) = measure::<BinarySet<String>>(&titles, "Dune", "Solaris", None);
        Report {
            streams: vec![StreamReport {
                stream: "unsorted",
                records: titles.len(),
                search_key: "Dune".to_string(),
                remove_key: "Solaris".to_string(),
                timings: vec![binary],
                traversals: None,
            }],
        }
    }

    #[test]
    fn test_write_text() {
        let mut out = Vec::new();
        report().write_text(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Inserting into unsorted trees...\n"));
        assert!(text.contains(" Time taken to insert into binary tree: "));
        assert!(text.contains("Searching unsorted trees for 'Dune'...\n"));
        assert!(text.contains(" Time taken to search in binary tree: "));
        assert!(text.contains("Removing 'Solaris' from unsorted trees...\n"));
        assert!(text.contains(" Time taken to remove from binary tree: "));
        // Solaris is replaced by its successor, so the Dune, Hyperion, Neuromancer path remains
        assert!(text.contains(" binary tree: 4 records, height 4\n"));
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        report().write_json(&mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        let stream = &value["streams"][0];
        assert_eq!(stream["stream"], "unsorted");
        assert_eq!(stream["records"], 5);
        assert_eq!(stream["timings"][0]["tree"], "binary tree");
        assert_eq!(stream["timings"][0]["len"], 4);
        assert!(stream["timings"][0].get("violation").is_none());
        assert!(stream.get("traversals").is_none());
    }
}
