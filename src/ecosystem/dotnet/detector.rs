use crate::{
    detection::{
        builder::DetectionBuilder, helper::DetectionHelper, scoring::*,
        types::Candidate,
    },
    ecosystem::{framework::Framework, traits::LanguageDetector},
    fs::{FileSystem, TreeScan},
};

pub const WEB_SDK: &str = "Microsoft.NET.Sdk.Web";

/// Detector for .NET projects.
pub struct DotNetDetector {}

impl DotNetDetector {
    pub fn new() -> Self {
        Self {}
    }

    fn aspnet(&self, fs: &dyn FileSystem, projects: &[String]) -> Candidate {
        let web = projects.iter().any(|p| fs.read(p).contains(WEB_SDK));
        let builder = DetectionBuilder::new(fs, Framework::AspNetCore);
        if !web {
            return builder.build();
        }

        builder
            .check_condition(true, DEPENDENCY, "web SDK project")
            .check_file(
                "appsettings.json",
                CONFIG_FILE,
                "appsettings.json found",
            )
            .check_file("Program.cs", FILE_PATTERN, "Program.cs found")
            .build()
    }

    fn generic(
        &self,
        fs: &dyn FileSystem,
        files: &[String],
        projects: &[String],
    ) -> Candidate {
        DetectionBuilder::new(fs, Framework::DotNet)
            .check_condition(
                !projects.is_empty(),
                BUILD_TOOL,
                "project file found",
            )
            .check_extension(files, ".sln", MINOR_INDICATOR, "solution file")
            .check_extension(files, ".cs", MINOR_INDICATOR, "C# sources")
            .build()
    }
}

impl LanguageDetector for DotNetDetector {
    fn name(&self) -> &str {
        "dotnet"
    }

    fn detect(&self, fs: &dyn FileSystem, scan: &TreeScan) -> Vec<Candidate> {
        let projects = scan
            .files_with_ext("csproj")
            .chain(scan.files_with_ext("fsproj"))
            .cloned()
            .collect::<Vec<String>>();

        DetectionHelper::specific_or_generic(
            vec![self.aspnet(fs, &projects)],
            0.0,
            || self.generic(fs, &scan.files, &projects),
        )
    }
}
