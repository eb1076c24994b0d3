use dysmalpy_launch::mpe;

fn main() {
    let params_file = std::env::args_os().skip(1).take(1).next();

    let mut launch = mpe::fit_single_3d();
    if let Some(params_file) = params_file {
        launch = launch.params_file(params_file);
    }

    match launch.status() {
        Ok(status) => {
            std::process::exit(status.code().unwrap_or(1));
        }
        Err(e) => {
            eprintln!("Failed with error - {}", e);
            std::process::exit(1);
        }
    }
}
