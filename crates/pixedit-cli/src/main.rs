use argh::FromArgs;
use std::{io::Write, path::PathBuf, process::ExitCode, str::FromStr};

use pixedit::{
    editor::{Action, Editor},
    imgproc::Filter,
};

/// An editing step applied after loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Filter(Filter),
    Original,
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("original") {
            return Ok(Step::Original);
        }
        s.parse::<Filter>()
            .map(Step::Filter)
            .map_err(|_| format!("unknown step: {s} (expected one of: invert, grayscale, original)"))
    }
}

impl From<Step> for Action {
    fn from(step: Step) -> Self {
        match step {
            Step::Filter(filter) => filter.into(),
            Step::Original => Action::Original,
        }
    }
}

#[derive(FromArgs)]
/// Load an image, apply invert/grayscale steps and save the result as PNG
struct Args {
    /// path to the input PNG or JPEG image
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// editing step to apply, in order: invert, grayscale or original (repeatable)
    #[argh(option, short = 's')]
    step: Vec<Step>,

    /// path where the current image is saved as PNG
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,
}

impl Args {
    fn actions(self) -> Vec<Action> {
        let mut actions = vec![Action::Load(self.input)];
        actions.extend(self.step.into_iter().map(Action::from));
        if let Some(output) = self.output {
            actions.push(Action::Save(output));
        }
        actions
    }
}

// dispatch in order, writing each status line, until the first failure
fn run(editor: &mut Editor, actions: &[Action], out: &mut impl Write) -> Result<(), String> {
    writeln!(out, "{}", editor.status()).map_err(|e| e.to_string())?;
    for action in actions {
        let status = editor.dispatch(action).map_err(|e| e.to_string())?;
        writeln!(out, "{status}").map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Args = argh::from_env();
    let actions = args.actions();

    let mut editor = Editor::new();
    if let Err(message) = run(&mut editor, &actions, &mut std::io::stdout()) {
        eprintln!("{message}");
        return ExitCode::FAILURE;
    }

    if let Ok(image) = editor.session().current() {
        log::debug!("final image {}x{}", image.width(), image.height());
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::{run, Args, Step};
    use pixedit::editor::{Action, Editor};
    use pixedit::image::PixelBuffer;
    use pixedit::imgproc::Filter;

    #[test]
    fn parse_steps() {
        assert_eq!("original".parse::<Step>(), Ok(Step::Original));
        assert_eq!("Invert".parse::<Step>(), Ok(Step::Filter(Filter::Invert)));
        assert_eq!(
            Action::from("gray".parse::<Step>().unwrap()),
            Action::Grayscale
        );
    }

    #[test]
    fn unknown_step_lists_every_step() {
        assert_eq!(
            "sepia".parse::<Step>(),
            Err("unknown step: sepia (expected one of: invert, grayscale, original)".to_string())
        );
    }

    #[test]
    fn args_to_actions() {
        let args = Args {
            input: "in.png".into(),
            step: vec![Step::Filter(Filter::Invert), Step::Original],
            output: Some("out.png".into()),
        };
        assert_eq!(
            args.actions(),
            vec![
                Action::Load("in.png".into()),
                Action::Invert,
                Action::Original,
                Action::Save("out.png".into()),
            ]
        );
    }

    #[test]
    fn run_prints_each_status() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let input = tmp_dir.path().join("in.png");
        pixedit::io::write_image_png(&input, &PixelBuffer::create(2, 2)?)?;

        let mut out = Vec::new();
        let mut editor = Editor::new();
        run(
            &mut editor,
            &[Action::Load(input), Action::Invert],
            &mut out,
        )?;

        assert_eq!(
            String::from_utf8(out)?,
            "Ready to edit...\nImage loaded successfully: in.png\nInvert colors applied.\n"
        );
        Ok(())
    }

    #[test]
    fn run_stops_at_first_failure_with_one_message() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let missing = tmp_dir.path().join("nope.png");

        let mut out = Vec::new();
        let mut editor = Editor::new();
        let res = run(
            &mut editor,
            &[Action::Load(missing.clone()), Action::Invert],
            &mut out,
        );

        assert_eq!(
            res,
            Err(format!(
                "Error loading image: File does not exist: {}",
                missing.display()
            ))
        );
        assert_eq!(String::from_utf8(out)?, "Ready to edit...\n");
        Ok(())
    }
}
