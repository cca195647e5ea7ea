// Copyright 2026 The Frontier Framework Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::env;
use std::path::Path;

fn main() {
    // Windows version resources for the manager and rebuild executables
    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        let mut res = winres::WindowsResource::new();

        if Path::new("icon.ico").exists() {
            res.set_icon("icon.ico");
        }

        if let Ok(v) = env::var("CARGO_PKG_VERSION") { res.set("FileVersion", &v); res.set("ProductVersion", &v); }
        if let Ok(v) = env::var("CARGO_PKG_NAME") { res.set("ProductName", &v); res.set("InternalName", &v); }
        if let Ok(v) = env::var("CARGO_PKG_DESCRIPTION") { res.set("FileDescription", &v); }
        res.set("LegalCopyright", "Copyright (c) 2026 The Frontier Framework Authors");

        if let Err(e) = res.compile() {
            println!("cargo:warning=WinRes compilation error: {}", e);
        }
    }

    println!("cargo:rerun-if-changed=icon.ico");
    println!("cargo:rerun-if-changed=build.rs");
}
