use mazepath_core::{Grid, MazeError, load_maze};
use std::{error::Error, path::PathBuf};

pub struct MazePathApp {
    pub maze_path: PathBuf,
}

impl MazePathApp {
    pub fn new(maze_path: PathBuf) -> Result<Self, Box<dyn Error>> {
        if !maze_path.exists() {
            return Err(format!("Maze file does not exist: {:?}", maze_path).into());
        }

        if !maze_path.is_file() {
            return Err(format!("Maze path is not a file: {:?}", maze_path).into());
        }

        Ok(Self { maze_path })
    }

    pub fn maze_name(&self) -> String {
        self.maze_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.maze_path.display().to_string())
    }

    pub fn load_grid(&self) -> Result<Grid, MazeError> {
        load_maze(&self.maze_path)
    }
}
