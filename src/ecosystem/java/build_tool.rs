use std::fmt::Display;

use crate::fs::FileSystem;

pub const BUILD_FILES: &[&str] =
    &["pom.xml", "build.gradle", "build.gradle.kts"];

/// JVM build tool, preferring the project wrapper when checked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JavaBuildTool {
    Maven { wrapper: bool },
    Gradle { wrapper: bool },
}

impl JavaBuildTool {
    pub fn detect(fs: &dyn FileSystem) -> Self {
        if fs.has("pom.xml") {
            return JavaBuildTool::Maven {
                wrapper: fs.has("mvnw"),
            };
        }

        JavaBuildTool::Gradle {
            wrapper: fs.has("gradlew"),
        }
    }

    /// Concatenated content of every build file.
    pub fn manifests(fs: &dyn FileSystem) -> String {
        BUILD_FILES.iter().map(|f| fs.read(f)).collect()
    }

    pub fn build_command(&self) -> &'static str {
        match self {
            JavaBuildTool::Maven { wrapper: true } => {
                "./mvnw -B package -DskipTests"
            }
            JavaBuildTool::Maven { wrapper: false } => {
                "mvn -B package -DskipTests"
            }
            JavaBuildTool::Gradle { wrapper: true } => {
                "./gradlew build -x test"
            }
            JavaBuildTool::Gradle { wrapper: false } => "gradle build -x test",
        }
    }

    /// Directory the build writes jars to.
    pub fn output_dir(&self) -> &'static str {
        match self {
            JavaBuildTool::Maven { .. } => "target",
            JavaBuildTool::Gradle { .. } => "build",
        }
    }

    pub fn jar_glob(&self) -> String {
        match self {
            JavaBuildTool::Maven { .. } => "target/*.jar".to_string(),
            JavaBuildTool::Gradle { .. } => "build/libs/*.jar".to_string(),
        }
    }
}

impl Display for JavaBuildTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JavaBuildTool::Maven { .. } => f.write_str("maven"),
            JavaBuildTool::Gradle { .. } => f.write_str("gradle"),
        }
    }
}
