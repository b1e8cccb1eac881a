#[cfg(test)]
mod store;

#[cfg(test)]
mod config;

// helper functions
fn working_path(input: &str) -> String {
    let path = std::env::current_dir().unwrap().join(input);
    if !std::fs::metadata(&path).is_ok() {
        match std::fs::create_dir(&path) {
            Ok(_) => {}
            Err(e) => {
                panic!("Failed to create directory: {}", e);
            }
        }
    }
    path.display().to_string()
}

fn remove_working_path(input: &str) {
    if std::fs::metadata(&input).is_ok() {
        match std::fs::remove_dir_all(&input) {
            Ok(_) => {}
            Err(e) => {
                panic!("Failed to remove directory: {}", e);
            }
        }
    }
}

fn main() {}
