use std::env;

pub fn main() {
    for key in ["PYTHONPATH", "DYSMALPY_DATADIR"] {
        match env::var(key) {
            Ok(value) => println!("{}={}", key, value),
            Err(_) => println!("{} is unset", key),
        }
    }
}
