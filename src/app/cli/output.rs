//! Static terminal output: banner, screen clearing, and the closing message.

use console::{Term, style};

use crate::domain::AppError;

pub const LOGO: &str = "\
%@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@
@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@
@@@@@@@@@**#@@@@@@@@@@@@@@@@@@@@@@**#@@@@@@@@@@%**@@@@@@@@@@%**%@@@@@@@@@@@@#**++#@@@@@@@@
@@@@@@@@+---@@@@@@@@@@@@@@@@@@@@@*---%@@@@@@@@@---+@@@@@@@@@=---@@@@@@@@@#=------=@@@@@@@@
@@@@@@@@+---@@@@@@@@@@@@@@@@@@@@@*---#@@@@@@@@@---+@@@@@@@@@=---@@@@@@@@@@@%#=---+@@@@@@@@
@@@@@@@@+---=+==+#@@@*=+%@@@*=+%@*----=--=+%@@@----=---=#@@@=---@@@%*=--=+#@@@=--@@@@@@@@@
@@@@@@@@+---------*@@---+@@@---+@*-----=----+@@-----=----=@@=---@@+---++=--=@@#*@@@@@@@@@@
@@@@@@@@+---%@@----@@---+@@%---+@*---*@@@+---%@---=@@@#---+@=---@*---=+++---*@@@@@@@@@@@@@
@@@@@@@@+---@@@=---@@---=@@#---*@*---*@@@=---%@---=@@@*---+@=---@*----+++++*@@@@@@@@@@@@@@
@@@@@@@@+---@@@=---@@*--------=@@#----------+@@----------=@@=---@@+----==--#@@@@@@@@@@@@@@
@@@@@@@@%==*@@@#==*@@@%*+===+#@@@@#==*+===*%@@@%+=*+===+#@@@#==*@@@%*+===+*@@@@@@@@@@@@@@@
@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@
@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@
";

/// Clear the screen when stdout is a terminal.
pub fn clear_screen() {
    let term = Term::stdout();
    if term.is_term() {
        if let Err(err) = term.clear_screen() {
            tracing::debug!(error = %err, "failed to clear screen");
        }
    }
}

pub fn print_banner() {
    println!("{}", LOGO);
}

pub fn print_success() {
    println!(
        "hubble PWA was installed {}.  \nStart your app in dev mode: \n \n{} \n",
        style("successfully").green(),
        style("npm run dev").magenta()
    );
}

/// Command failures already read `An error occurred: ...`; everything else
/// gets an `Error:` prefix.
pub fn error_message(err: &AppError) -> String {
    match err {
        AppError::CommandFailed { .. } => err.to_string(),
        _ => format!("Error: {}", err),
    }
}

pub fn print_error(err: &AppError) {
    eprintln!("{}", style(error_message(err)).red().for_stderr());
}
