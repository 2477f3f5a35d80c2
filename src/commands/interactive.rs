use crate::cli::InteractiveArgs;
use crate::cross::{
    monohybrid_cross, validate_parents, CrossType, DihybridResult, Genotype, MonohybridResult,
};
use crate::report::{write_dihybrid_report, write_monohybrid_report};
use crate::utils::{with_context, Result};
use dialoguer::{Confirm, Input, Select};
use is_terminal::IsTerminal;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Where an interactive session gets its answers from.
///
/// `None` from `cross_type` or `parent` means the input is closed and the
/// session ends.
pub trait Prompter {
    fn cross_type(&mut self) -> Result<Option<CrossType>>;
    fn parent(&mut self, label: &str, cross_type: CrossType) -> Result<Option<String>>;
    /// Waits for the user to acknowledge a rejected cross before restarting.
    fn acknowledge(&mut self) -> Result<()>;
    fn restart(&mut self) -> Result<bool>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn cross_type(&mut self) -> Result<Option<CrossType>> {
        (**self).cross_type()
    }

    fn parent(&mut self, label: &str, cross_type: CrossType) -> Result<Option<String>> {
        (**self).parent(label, cross_type)
    }

    fn acknowledge(&mut self) -> Result<()> {
        (**self).acknowledge()
    }

    fn restart(&mut self) -> Result<bool> {
        (**self).restart()
    }
}

/// Prompts on the terminal with `dialoguer`.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn cross_type(&mut self) -> Result<Option<CrossType>> {
        let items = [
            "Monohybrid (one gene, e.g. Aa)",
            "Dihybrid (two genes, e.g. AaBb)",
        ];
        let selection = Select::new()
            .with_prompt("Which cross would you like?")
            .items(&items)
            .default(0)
            .interact()
            .map_err(with_context("Failed to read cross type"))?;
        Ok(Some(match selection {
            0 => CrossType::Monohybrid,
            _ => CrossType::Dihybrid,
        }))
    }

    fn parent(&mut self, label: &str, cross_type: CrossType) -> Result<Option<String>> {
        Input::<String>::new()
            .with_prompt(format!("Enter the {} {} parent", label, cross_type))
            .allow_empty(true)
            .interact_text()
            .map(Some)
            .map_err(with_context("Failed to read parent"))
    }

    fn acknowledge(&mut self) -> Result<()> {
        Input::<String>::new()
            .with_prompt("Press enter to restart")
            .allow_empty(true)
            .interact_text()
            .map(|_| ())
            .map_err(with_context("Failed to read answer"))
    }

    fn restart(&mut self) -> Result<bool> {
        Confirm::new()
            .with_prompt("Would you like to restart?")
            .default(true)
            .interact()
            .map_err(with_context("Failed to read answer"))
    }
}

/// Reads one answer per line, for piped input where terminal widgets
/// cannot run.
///
/// Cross type lines starting with `y` or naming a monohybrid cross select a
/// monohybrid cross, any other non-blank line a dihybrid one. A blank
/// restart answer restarts.
pub struct LinePrompter<R> {
    reader: R,
}

impl<R: BufRead> LinePrompter<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let bytes = self
            .reader
            .read_line(&mut line)
            .map_err(with_context("Failed to read input"))?;
        Ok((bytes > 0).then(|| line.trim().to_string()))
    }
}

impl<R: BufRead> Prompter for LinePrompter<R> {
    fn cross_type(&mut self) -> Result<Option<CrossType>> {
        while let Some(line) = self.next_line()? {
            let answer = line.to_ascii_lowercase();
            if answer.is_empty() {
                continue;
            }
            if answer.starts_with('y') {
                return Ok(Some(CrossType::Monohybrid));
            }
            return Ok(Some(answer.parse().unwrap_or(CrossType::Dihybrid)));
        }
        Ok(None)
    }

    fn parent(&mut self, _label: &str, _cross_type: CrossType) -> Result<Option<String>> {
        self.next_line()
    }

    fn acknowledge(&mut self) -> Result<()> {
        self.next_line().map(|_| ())
    }

    fn restart(&mut self) -> Result<bool> {
        Ok(match self.next_line()? {
            Some(answer) => answer.is_empty() || answer.to_ascii_lowercase().starts_with('y'),
            None => false,
        })
    }
}

#[derive(Debug)]
pub enum CrossReport {
    Monohybrid(MonohybridResult),
    Dihybrid(DihybridResult),
}

impl CrossReport {
    pub fn compute(parent1: &Genotype, parent2: &Genotype) -> CrossReport {
        match parent1.cross_type() {
            CrossType::Monohybrid => CrossReport::Monohybrid(monohybrid_cross(parent1, parent2)),
            CrossType::Dihybrid => CrossReport::Dihybrid(DihybridResult::new(parent1, parent2)),
        }
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        match self {
            CrossReport::Monohybrid(result) => write_monohybrid_report(writer, result),
            CrossReport::Dihybrid(result) => write_dihybrid_report(writer, result),
        }
    }
}

#[derive(Debug)]
enum Stage {
    AwaitingCrossType,
    AwaitingParents(CrossType),
    Rejected,
    Computing(Genotype, Genotype),
    Reporting(CrossReport),
    AwaitingRestart,
    Finished,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub crosses: usize,
    pub rejected: usize,
}

pub struct Session<P, W> {
    prompter: P,
    out: W,
    fixed_cross_type: Option<CrossType>,
    summary: SessionSummary,
}

impl<P: Prompter, W: Write> Session<P, W> {
    pub fn new(prompter: P, out: W) -> Self {
        Self {
            prompter,
            out,
            fixed_cross_type: None,
            summary: SessionSummary::default(),
        }
    }

    /// Skips the cross type question and always uses `cross_type`.
    pub fn with_cross_type(mut self, cross_type: Option<CrossType>) -> Self {
        self.fixed_cross_type = cross_type;
        self
    }

    pub fn run(mut self) -> Result<SessionSummary> {
        let mut stage = Stage::AwaitingCrossType;
        while !matches!(stage, Stage::Finished) {
            stage = self.step(stage)?;
        }
        Ok(self.summary)
    }

    fn step(&mut self, stage: Stage) -> Result<Stage> {
        let next = match stage {
            Stage::AwaitingCrossType => {
                let cross_type = match self.fixed_cross_type {
                    Some(cross_type) => Some(cross_type),
                    None => self.prompter.cross_type()?,
                };
                cross_type.map_or(Stage::Finished, Stage::AwaitingParents)
            }
            Stage::AwaitingParents(cross_type) => {
                self.say(format_args!(
                    "Make sure you enter capitals first (e.g. {})",
                    example(cross_type)
                ))?;
                let Some(raw1) = self.prompter.parent("first", cross_type)? else {
                    return Ok(Stage::Finished);
                };
                let Some(raw2) = self.prompter.parent("second", cross_type)? else {
                    return Ok(Stage::Finished);
                };
                match validate_parents(raw1.trim(), raw2.trim(), cross_type) {
                    Ok((parent1, parent2)) => Stage::Computing(parent1, parent2),
                    Err(e) => {
                        log::debug!("Rejected parents {:?} x {:?}: {}", raw1, raw2, e);
                        self.summary.rejected += 1;
                        self.say(e)?;
                        Stage::Rejected
                    }
                }
            }
            Stage::Rejected => {
                self.prompter.acknowledge()?;
                Stage::AwaitingCrossType
            }
            Stage::Computing(parent1, parent2) => {
                log::debug!("Crossing {} x {}", parent1, parent2);
                self.summary.crosses += 1;
                Stage::Reporting(CrossReport::compute(&parent1, &parent2))
            }
            Stage::Reporting(report) => {
                self.say("")?;
                report
                    .write(&mut self.out)
                    .map_err(with_context("Failed to write report"))?;
                Stage::AwaitingRestart
            }
            Stage::AwaitingRestart => {
                if self.prompter.restart()? {
                    Stage::AwaitingCrossType
                } else {
                    Stage::Finished
                }
            }
            Stage::Finished => Stage::Finished,
        };
        Ok(next)
    }

    fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.out, "{}", line).map_err(with_context("Failed to write output"))
    }
}

fn example(cross_type: CrossType) -> &'static str {
    match cross_type {
        CrossType::Monohybrid => "Aa",
        CrossType::Dihybrid => "AaBb",
    }
}

pub fn interactive(args: InteractiveArgs) -> Result<()> {
    let stdin = io::stdin();
    let summary = if stdin.is_terminal() {
        Session::new(TerminalPrompter, io::stdout())
            .with_cross_type(args.cross_type)
            .run()?
    } else {
        log::debug!("Standard input is not a terminal, reading answers line by line");
        Session::new(LinePrompter::new(stdin.lock()), io::stdout())
            .with_cross_type(args.cross_type)
            .run()?
    };
    log::info!(
        "Session finished: crosses={}, rejected={}",
        summary.crosses,
        summary.rejected
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::io::Cursor;

    #[derive(Default)]
    struct ScriptedPrompter {
        cross_types: VecDeque<CrossType>,
        parents: VecDeque<&'static str>,
        restarts: VecDeque<bool>,
        acknowledged: usize,
    }

    impl Prompter for ScriptedPrompter {
        fn cross_type(&mut self) -> Result<Option<CrossType>> {
            Ok(self.cross_types.pop_front())
        }

        fn parent(&mut self, _label: &str, _cross_type: CrossType) -> Result<Option<String>> {
            self.parents
                .pop_front()
                .map(|p| Some(p.to_string()))
                .ok_or_else(|| "No parent left".to_string())
        }

        fn acknowledge(&mut self) -> Result<()> {
            self.acknowledged += 1;
            Ok(())
        }

        fn restart(&mut self) -> Result<bool> {
            self.restarts
                .pop_front()
                .ok_or_else(|| "No restart answer left".to_string())
        }
    }

    fn run<P: Prompter>(prompter: P) -> (Result<SessionSummary>, String) {
        let mut out = Vec::new();
        let summary = Session::new(prompter, &mut out).run();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_single_monohybrid_cross() {
        let prompter = ScriptedPrompter {
            cross_types: VecDeque::from([CrossType::Monohybrid]),
            parents: VecDeque::from(["Aa", " Aa "]),
            restarts: VecDeque::from([false]),
            ..Default::default()
        };
        let (summary, out) = run(prompter);
        assert_eq!(
            summary.unwrap(),
            SessionSummary {
                crosses: 1,
                rejected: 0
            }
        );
        assert_eq!(
            out,
            "Make sure you enter capitals first (e.g. Aa)\n\
             \n\
             There is a 25% chance of homozygous dominant (1:4 = AA)\n\
             There is a 25% chance of homozygous recessive (1:4 = aa)\n\
             There is a 50% chance of heterozygous (2:4 = Aa)\n"
        );
    }

    #[test]
    fn test_rejected_parents_always_restart() {
        let mut prompter = ScriptedPrompter {
            cross_types: VecDeque::from([CrossType::Dihybrid, CrossType::Dihybrid]),
            parents: VecDeque::from(["AAB", "AaBb", "AaBb", "AaBb"]),
            restarts: VecDeque::from([false]),
            ..Default::default()
        };
        let mut out = Vec::new();
        let summary = Session::new(&mut prompter, &mut out).run().unwrap();
        assert_eq!(
            summary,
            SessionSummary {
                crosses: 1,
                rejected: 1
            }
        );
        assert_eq!(prompter.acknowledged, 1);
        assert!(prompter.restarts.is_empty());
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("All parents must be 4 characters, got 3\n"));
        assert!(out.contains("AaBb - 25% (4:16)\n"));
        assert!(out.contains("aabb - 6.25% (1:16)\n"));
    }

    #[test]
    fn test_mismatched_genes_are_reported() {
        let prompter = ScriptedPrompter {
            cross_types: VecDeque::from([CrossType::Monohybrid]),
            parents: VecDeque::from(["Aa", "Bb"]),
            ..Default::default()
        };
        let (summary, out) = run(prompter);
        assert_eq!(summary.unwrap().rejected, 1);
        assert!(out.ends_with("Parents carry different genes at locus 1: 'A' and 'B'\n"));
    }

    #[test]
    fn test_fixed_cross_type_is_not_asked() {
        let prompter = ScriptedPrompter {
            parents: VecDeque::from(["AABB", "aabb"]),
            restarts: VecDeque::from([false]),
            ..Default::default()
        };
        let mut out = Vec::new();
        let summary = Session::new(prompter, &mut out)
            .with_cross_type(Some(CrossType::Dihybrid))
            .run()
            .unwrap();
        assert_eq!(summary.crosses, 1);
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Make sure you enter capitals first (e.g. AaBb)\n"));
        assert!(out.contains("AaBb - 100% (16:16)\n"));
    }

    #[test]
    fn test_prompter_failure_ends_session() {
        let prompter = ScriptedPrompter {
            cross_types: VecDeque::from([CrossType::Monohybrid]),
            parents: VecDeque::from(["Aa"]),
            ..Default::default()
        };
        let (summary, _) = run(prompter);
        assert_eq!(summary, Err("No parent left".to_string()));
    }

    #[test]
    fn test_piped_session() {
        let input = "yes\nAa\nAa\ny\ndi\nAAB\nAaBb\n\ndi\nAABB\naabb\nn\n";
        let (summary, out) = run(LinePrompter::new(Cursor::new(input)));
        assert_eq!(
            summary.unwrap(),
            SessionSummary {
                crosses: 2,
                rejected: 1
            }
        );
        assert!(out.contains("There is a 50% chance of heterozygous (2:4 = Aa)\n"));
        assert!(out.contains("All parents must be 4 characters, got 3\n"));
        assert!(out.contains("AaBb - 100% (16:16)\n"));
    }

    #[test]
    fn test_piped_session_ends_with_input() {
        let (summary, out) = run(LinePrompter::new(Cursor::new("mono\nAa\n")));
        assert_eq!(summary.unwrap(), SessionSummary::default());
        assert_eq!(out, "Make sure you enter capitals first (e.g. Aa)\n");

        let (summary, _) = run(LinePrompter::new(Cursor::new("mono\nAA\naa\n")));
        assert_eq!(summary.unwrap().crosses, 1);
    }

    #[test]
    fn test_line_prompter_answers() {
        let mut prompter = LinePrompter::new(Cursor::new("\n  \nNo\nmonohybrid\nY\n\nnope\n"));
        assert_eq!(prompter.cross_type().unwrap(), Some(CrossType::Dihybrid));
        assert_eq!(prompter.cross_type().unwrap(), Some(CrossType::Monohybrid));
        assert_eq!(prompter.cross_type().unwrap(), Some(CrossType::Monohybrid));
        assert!(prompter.restart().unwrap());
        assert!(!prompter.restart().unwrap());
        assert!(!prompter.restart().unwrap());
        assert_eq!(prompter.cross_type().unwrap(), None);
    }

    #[test]
    fn test_report_dispatches_on_cross_type() {
        let (p1, p2) = validate_parents("AaBb", "aabb", CrossType::Dihybrid).unwrap();
        assert!(matches!(
            CrossReport::compute(&p1, &p2),
            CrossReport::Dihybrid(_)
        ));
        let (p1, p2) = validate_parents("Aa", "aa", CrossType::Monohybrid).unwrap();
        assert!(matches!(
            CrossReport::compute(&p1, &p2),
            CrossReport::Monohybrid(_)
        ));
    }
}
