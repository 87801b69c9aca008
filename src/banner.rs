// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
 ____                            _    __     __        _  __
|  _ \ _ __ ___  _ __ ___  _ __ | |_  \ \   / /__ _ __(_)/ _|_   _
| |_) | '__/ _ \| '_ ` _ \| '_ \| __|  \ \ / / _ \ '__| | |_| | | |
|  __/| | | (_) | | | | | | |_) | |_    \ V /  __/ |  | |  _| |_| |
|_|   |_|  \___/|_| |_| |_| .__/ \__|    \_/ \___|_|  |_|_|  \__, |
                          |_|                                |___/

    Prompt Evaluation & Consistency Testing API
"#;
    println!("{}", banner);
}
