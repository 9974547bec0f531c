use anyhow::Result;
use serde::Serialize;
use std::fmt::Display;

use crate::types::OutputFormat;

pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self {
            json_mode: format == OutputFormat::Json,
            color,
        }
    }

    pub fn color(&self) -> bool {
        self.color && !self.json_mode
    }

    /// Print `data` as pretty JSON in JSON mode, otherwise print `view`.
    pub fn render<T, V>(&self, data: &T, view: V) -> Result<()>
    where
        T: Serialize + ?Sized,
        V: Display,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(data)?);
            return Ok(());
        }

        print!("{}", view);
        Ok(())
    }
}
