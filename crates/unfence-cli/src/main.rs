use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::{env, fs, io::stdout, path::PathBuf, process};
use unfence_config::Config;
use unfence_engine::{ParseOutput, ParsedFile, io, parse};

struct App {
    output: ParseOutput,
    file_list_state: ListState,
}

impl App {
    fn new(output: ParseOutput) -> Self {
        let mut app = Self {
            output,
            file_list_state: ListState::default(),
        };

        if !app.output.files.is_empty() {
            app.file_list_state.select(Some(0));
        }
        app
    }

    fn next_file(&mut self) {
        if self.output.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.output.files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
    }

    fn previous_file(&mut self) {
        if self.output.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.output.files.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.file_list_state.select(Some(i));
    }

    fn selected_file(&self) -> Option<&ParsedFile> {
        self.file_list_state
            .selected()
            .and_then(|i| self.output.files.get(i))
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        process::exit(1);
    }

    let input_path = PathBuf::from(&args[1]);
    let text = fs::read_to_string(&input_path)
        .with_context(|| format!("failed to read {}", input_path.display()))?;
    let output = parse(&text);

    match args.get(2).map(String::as_str) {
        None => run_browser(output),
        Some("--json") => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Some("-o") => extract(output, args.get(3).map(PathBuf::from)),
        Some(other) => {
            eprintln!("Unknown argument: {other}");
            print_usage(&args[0]);
            process::exit(1);
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} <input.md> [--json | -o [output-dir]]");
    eprintln!("  (no flag)   browse parsed files in the terminal");
    eprintln!("  --json      print the parse result as JSON");
    eprintln!("  -o [dir]    extract files to dir, or to the configured output_path");
}

fn extract(output: ParseOutput, explicit_dir: Option<PathBuf>) -> Result<()> {
    let config_path = Config::config_path();

    let output_root = match explicit_dir {
        Some(dir) => dir,
        None => match Config::load() {
            Ok(Some(config)) => config.output_path,
            Ok(None) => {
                eprintln!("Error: no output directory given and no config file found");
                eprintln!("Pass one with -o <dir> or create {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: failed to load config file: {e}");
                process::exit(1);
            }
        },
    };

    if output.files.is_empty() {
        println!("No files found in input");
        return Ok(());
    }

    let written = io::export_files(&output.files, &output_root)
        .with_context(|| format!("failed to extract to {}", output_root.display()))?;

    for path in &written {
        println!("wrote {}", path.display());
    }
    println!("{} files extracted to {}", written.len(), output_root.display());

    if let Some(structure) = &output.folder_structure {
        println!("\nDeclared folder structure:\n{structure}");
    }

    Ok(())
}

fn run_browser(output: ParseOutput) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(output);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(f.area());

    // File list panel
    let file_items: Vec<ListItem> = app
        .output
        .files
        .iter()
        .map(|file| ListItem::new(vec![Line::from(vec![Span::raw(file.path.clone())])]))
        .collect();

    let title = format!("Files ({})", app.output.files.len());
    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Content panel
    let (content_title, content_text) = match app.selected_file() {
        Some(file) => (
            format!("{} [{}]", file.path, file.language),
            file.content
                .lines()
                .map(|line| Line::from(vec![Span::raw(line.to_string())]))
                .collect(),
        ),
        None => (
            "Content".to_string(),
            vec![Line::from("No files parsed from the input")],
        ),
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(content_title));

    f.render_widget(content, chunks[1]);

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next"),
    ]);

    let help = Paragraph::new(vec![help_text]).block(Block::default());

    let bottom_chunk = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    f.render_widget(help, bottom_chunk[1]);
}
