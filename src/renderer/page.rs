//! HTML page wrapping one SVG document per model

use std::io::{self, Write};

/// Style of the solution boxes in the default page
pub const DEFAULT_STYLE: &str = "div.solution {
        display:inline-block;
        min-width:200px;
        width: 22%;
        background-color: white;
        border: 10px solid green;
        padding: 5px;
        margin: 5px;
}";

/// Page chrome settings
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub title: String,
    /// CSS placed in the page head
    pub style: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Witness Puzzle".to_string(),
            style: DEFAULT_STYLE.to_string(),
        }
    }
}

/// Streams a page: prologue, one `div.solution` per SVG, epilogue
///
/// Every part is written as soon as it is available, so a failure later in
/// the run leaves the parts already written in the output.
pub struct PageWriter<W: Write> {
    out: W,
    config: PageConfig,
    solutions: usize,
}

impl<W: Write> PageWriter<W> {
    pub fn new(out: W, config: PageConfig) -> Self {
        Self {
            out,
            config,
            solutions: 0,
        }
    }

    /// Write the head and open the solutions container
    pub fn begin(&mut self) -> io::Result<()> {
        writeln!(self.out, "<html>")?;
        writeln!(self.out, "<head>")?;
        writeln!(self.out, "<title>{}</title>", self.config.title)?;
        writeln!(self.out, "<style>")?;
        writeln!(self.out, "{}", self.config.style)?;
        writeln!(self.out, "</style>")?;
        writeln!(self.out, "</head>")?;
        writeln!(self.out, "<body>")?;
        writeln!(self.out, r#"<div id="solutions">"#)?;
        self.out.flush()
    }

    /// Write one rendered model
    pub fn solution(&mut self, svg: &str) -> io::Result<()> {
        writeln!(self.out, r#"<div class="solution">"#)?;
        writeln!(self.out, "{}", svg)?;
        writeln!(self.out, "</div>")?;
        self.solutions += 1;
        self.out.flush()
    }

    /// Close the page and hand back the writer
    pub fn finish(mut self) -> io::Result<W> {
        writeln!(self.out, "</div>")?;
        writeln!(self.out, "</body>")?;
        writeln!(self.out, "</html>")?;
        self.out.flush()?;
        Ok(self.out)
    }

    /// Number of solutions written so far
    pub fn solutions(&self) -> usize {
        self.solutions
    }
}
