//! Generate command - the inline-edit flow

use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::Args;
use tracing::info;

use crate::domain::{
    ChatMessage, CodeBlockExtractor, DomainError, GenerationSettings, ProjectContext, Provider,
};
use crate::infrastructure::llm::{HttpClientTrait, LlmService};

/// Arguments for the generate command
#[derive(Args, Clone)]
pub struct GenerateArgs {
    /// File holding the code to work on
    #[arg(long)]
    pub file: PathBuf,

    /// 1-based inclusive line range to select, e.g. `10:24` (whole file if omitted)
    #[arg(long)]
    pub lines: Option<LineRange>,

    /// What to do with the selected code
    #[arg(long)]
    pub prompt: String,

    /// Provider to use (overrides the configured one)
    #[arg(long)]
    pub provider: Option<Provider>,

    /// Replace the selection in the file instead of printing the code
    #[arg(long)]
    pub write: bool,

    /// Print the full answer rather than the extracted code
    #[arg(long, conflicts_with = "write")]
    pub raw: bool,
}

/// Inclusive, 1-based line range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl FromStr for LineRange {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::validation(format!("Invalid line range '{}'", s));

        let (start, end) = match s.split_once(':') {
            Some((start, end)) => (start, end),
            None => (s, s),
        };
        let start: usize = start.trim().parse().map_err(|_| invalid())?;
        let end: usize = end.trim().parse().map_err(|_| invalid())?;

        if start == 0 || end < start {
            return Err(invalid());
        }

        Ok(Self { start, end })
    }
}

/// A file split around the selected region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    pub before: &'a str,
    pub selected: &'a str,
    pub after: &'a str,
}

impl<'a> Selection<'a> {
    pub fn whole(content: &'a str) -> Self {
        Self {
            before: "",
            selected: content,
            after: "",
        }
    }

    /// Select whole lines; the newline ending the last selected line stays in
    /// `after`.
    pub fn lines(content: &'a str, range: LineRange) -> Result<Self, DomainError> {
        let mut offset = 0;
        let mut start = None;
        let mut end = None;

        for (idx, line) in content.split_inclusive('\n').enumerate() {
            let number = idx + 1;
            if number == range.start {
                start = Some(offset);
            }
            if number == range.end {
                end = Some(offset + line.trim_end_matches(['\n', '\r']).len());
                break;
            }
            offset += line.len();
        }

        match (start, end) {
            (Some(start), Some(end)) => Ok(Self {
                before: &content[..start],
                selected: &content[start..end],
                after: &content[end..],
            }),
            _ => Err(DomainError::validation(format!(
                "Line range {}:{} is outside the file",
                range.start, range.end
            ))),
        }
    }

    pub fn replace(&self, replacement: &str) -> String {
        let mut content =
            String::with_capacity(self.before.len() + replacement.len() + self.after.len());
        content.push_str(self.before);
        content.push_str(replacement);
        content.push_str(self.after);
        content
    }
}

/// Ask for a rewrite of `selection` and return the full answer.
pub async fn request_rewrite<C: HttpClientTrait>(
    service: &LlmService<C>,
    settings: &GenerationSettings,
    provider: Provider,
    file: &Path,
    content: &str,
    selection: &Selection<'_>,
    prompt: &str,
) -> Result<String, DomainError> {
    if selection.selected.trim().is_empty() {
        return Err(DomainError::validation(
            "Please select some text to generate code",
        ));
    }

    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(DomainError::validation("Prompt must not be empty"));
    }

    let context = ProjectContext::new(file.display().to_string(), content)
        .with_selection(selection.selected);
    let messages = vec![context.to_message(), ChatMessage::user(prompt)];

    service.send_prompt(&messages, settings, provider).await
}

/// Run the generate command
pub async fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();
    let service = super::build_service(&config)?;

    let provider = args
        .provider
        .unwrap_or_else(|| config.settings.selected_provider());
    let settings = config.settings.generation_settings(provider);

    let content = tokio::fs::read_to_string(&args.file).await?;
    let selection = match args.lines {
        Some(range) => Selection::lines(&content, range)?,
        None => Selection::whole(&content),
    };

    let response = request_rewrite(
        &service,
        &settings,
        provider,
        &args.file,
        &content,
        &selection,
        &args.prompt,
    )
    .await?;

    if args.raw {
        println!("{}", response);
        return Ok(());
    }

    let code = CodeBlockExtractor::new().extract(&response);

    if args.write {
        tokio::fs::write(&args.file, selection.replace(&code)).await?;
        info!(file = %args.file.display(), "Replaced selection with generated code");
        eprintln!(
            "Code generated and inserted into {}",
            args.file.display()
        );
    } else {
        println!("{}", code);
    }

    Ok(())
}
