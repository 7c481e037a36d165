//! Deployment and package manifests.

use super::kebab_slug;

const VERCEL_TEMPLATE: &str = r#"{
  "name": "%SLUG%",
  "version": 2,
  "builds": [
    {
      "src": "package.json",
      "use": "@vercel/static-build",
      "config": {
        "distDir": "dist"
      }
    }
  ],
  "routes": [
    {
      "src": "/(.*)",
      "dest": "/index.html"
    }
  ],
  "env": {
    "REACT_APP_SUPABASE_URL": "@supabase-url",
    "REACT_APP_SUPABASE_ANON_KEY": "@supabase-anon-key"
  }
}"#;

const DOCKERFILE: &str = r#"FROM node:18-alpine

WORKDIR /app

# Copy package files
COPY package*.json ./

# Install dependencies
RUN npm ci --only=production

# Copy source code
COPY . .

# Build the application
RUN npm run build

# Expose port
EXPOSE 3000

# Start the application
CMD ["npm", "start"]"#;

const PACKAGE_TEMPLATE: &str = r#"{
  "name": "%SLUG%",
  "version": "1.0.0",
  "private": true,
  "scripts": {
    "dev": "vite",
    "build": "vite build",
    "preview": "vite preview",
    "start": "vite preview --port 3000"
  },
  "dependencies": {
    %STACK_DEPENDENCIES%,
    %DATABASE_DEPENDENCY%,
    "tailwindcss": "^3.3.0",
    "autoprefixer": "^10.4.16",
    "postcss": "^8.4.32"
  },
  "devDependencies": {
    "vite": "^5.0.0",
    "@vitejs/plugin-react": "^4.2.0"
  }
}"#;

const REACT_DEPENDENCIES: &[(&str, &str)] = &[
    ("react", "^18.2.0"),
    ("react-dom", "^18.2.0"),
    ("react-router-dom", "^6.8.0"),
];
const VUE_DEPENDENCIES: &[(&str, &str)] = &[("vue", "^3.3.0"), ("vue-router", "^4.2.0")];
const SVELTE_DEPENDENCIES: &[(&str, &str)] =
    &[("svelte", "^4.0.0"), ("@sveltejs/kit", "^1.20.0")];

/// Front-end packages; unknown stacks get React's.
fn stack_dependencies(tech_stack: &str) -> &'static [(&'static str, &'static str)] {
    match tech_stack {
        "vue" => VUE_DEPENDENCIES,
        "svelte" => SVELTE_DEPENDENCIES,
        _ => REACT_DEPENDENCIES,
    }
}

/// Client package for the database; unknown backends get Supabase's.
fn database_dependency(database: &str) -> (&'static str, &'static str) {
    match database {
        "firebase" => ("firebase", "^10.7.0"),
        "mongodb" => ("mongodb", "^6.3.0"),
        _ => ("@supabase/supabase-js", "^2.38.0"),
    }
}

pub fn vercel_config(project_name: &str) -> String {
    VERCEL_TEMPLATE.replace("%SLUG%", &kebab_slug(project_name))
}

pub fn dockerfile() -> String {
    DOCKERFILE.to_string()
}

pub fn package_json(project_name: &str, tech_stack: &str, database: &str) -> String {
    let stack = stack_dependencies(tech_stack)
        .iter()
        .map(|(name, version)| format!("\"{name}\": \"{version}\""))
        .collect::<Vec<_>>()
        .join(",\n    ");
    let (db_name, db_version) = database_dependency(database);

    PACKAGE_TEMPLATE
        .replace("%SLUG%", &kebab_slug(project_name))
        .replace("%STACK_DEPENDENCIES%", &stack)
        .replace("%DATABASE_DEPENDENCY%", &format!("\"{db_name}\": \"{db_version}\""))
}
