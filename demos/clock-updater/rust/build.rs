// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint_build::CompilerConfiguration;
use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=SLINT_STYLE");

    let mut config = CompilerConfiguration::new();
    if env::var_os("SLINT_STYLE").is_none() {
        config = config.with_style("fluent".into());
    }

    slint_build::compile_with_config("../ui/clock-updater.slint", config).unwrap();
}
