use crate::{
    detection::types::Plan,
    ecosystem::{
        framework::Framework,
        python::{
            django::{DjangoServerType, detect_project_name, django_run_command},
            package_manager::PythonPackageManager,
        },
        traits::PlanBuilder,
    },
    fs::FileSystem,
};

/// Module paths probed for an ASGI/WSGI `app` object, with their import
/// path.
const APP_MODULES: &[(&str, &str)] = &[
    ("main.py", "main"),
    ("app.py", "app"),
    ("app/main.py", "app.main"),
    ("src/main.py", "src.main"),
    ("api/main.py", "api.main"),
    ("wsgi.py", "wsgi"),
    ("application.py", "application"),
];

const SCRIPTS: &[&str] = &["main.py", "app.py", "run.py", "server.py"];

fn app_module(fs: &dyn FileSystem, default: &str) -> String {
    APP_MODULES
        .iter()
        .find(|(file, _)| fs.has(file))
        .map(|(_, module)| module.to_string())
        .unwrap_or_else(|| default.to_string())
}

/// Plan builder for Python frameworks.
pub struct PythonPlanner {}

impl PythonPlanner {
    pub fn new() -> Self {
        Self {}
    }

    fn django(&self, fs: &dyn FileSystem, pm: PythonPackageManager) -> Plan {
        let prefix = pm.run_prefix();
        let server_type = DjangoServerType::detect(fs);
        let project = detect_project_name(fs);
        let run = django_run_command(server_type, project.as_deref());

        let plan = Plan::new()
            .with_build([
                pm.install_command(fs).to_string(),
                format!("{prefix}python manage.py collectstatic --noinput"),
            ])
            .with_run([format!("{prefix}{run}")])
            .with_env(&[
                "DJANGO_SETTINGS_MODULE",
                "SECRET_KEY",
                "DATABASE_URL",
                "ALLOWED_HOSTS",
                "DEBUG",
            ])
            .with_meta("server_type", server_type.to_string());

        match project {
            Some(project) => plan.with_meta("project_name", project),
            None => plan,
        }
    }

    fn fastapi(&self, fs: &dyn FileSystem, pm: PythonPackageManager) -> Plan {
        let module = app_module(fs, "main");
        Plan::new()
            .with_build([pm.install_command(fs)])
            .with_run([format!(
                "{}uvicorn {module}:app --host 0.0.0.0 --port 8000",
                pm.run_prefix()
            )])
            .with_env(&["PORT", "DATABASE_URL"])
    }

    fn flask(&self, fs: &dyn FileSystem, pm: PythonPackageManager) -> Plan {
        let module = app_module(fs, "app");
        Plan::new()
            .with_build([pm.install_command(fs)])
            .with_run([format!(
                "{}gunicorn {module}:app --bind 0.0.0.0:8000",
                pm.run_prefix()
            )])
            .with_env(&["FLASK_APP", "SECRET_KEY", "PORT"])
    }

    fn generic(&self, fs: &dyn FileSystem, pm: PythonPackageManager) -> Plan {
        let script = SCRIPTS
            .iter()
            .find(|f| fs.has(f))
            .copied()
            .unwrap_or("main.py");

        Plan::new()
            .with_build([pm.install_command(fs)])
            .with_run([format!("{}python {script}", pm.run_prefix())])
            .with_env(&["PORT"])
    }
}

impl PlanBuilder for PythonPlanner {
    fn build_plan(&self, framework: Framework, fs: &dyn FileSystem) -> Plan {
        let pm = PythonPackageManager::detect(fs);

        let plan = match framework {
            Framework::Django => self.django(fs, pm),
            Framework::FastApi => self.fastapi(fs, pm),
            Framework::Flask => self.flask(fs, pm),
            _ => self.generic(fs, pm),
        };

        plan.with_env(&["PYTHONUNBUFFERED"])
            .with_meta("package_manager", pm.to_string())
    }
}
