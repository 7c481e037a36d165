use super::table_name;

const USERS_TABLE: &str = "-- Users table
CREATE TABLE users (
  id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
  email TEXT UNIQUE NOT NULL,
  name TEXT NOT NULL,
  avatar_url TEXT,
  created_at TIMESTAMP DEFAULT NOW(),
  updated_at TIMESTAMP DEFAULT NOW()
);";

const FEATURE_TABLE_TEMPLATE: &str = "-- %FEATURE% table
CREATE TABLE %TABLE% (
  id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
  user_id UUID REFERENCES users(id),
  name TEXT NOT NULL,
  description TEXT,
  status TEXT DEFAULT 'active',
  created_at TIMESTAMP DEFAULT NOW(),
  updated_at TIMESTAMP DEFAULT NOW()
);";

const CONFIG_TEMPLATE: &str = "// Database configuration
export const dbConfig = {
  type: '%DATABASE%',
  url: process.env.DATABASE_URL,
  apiKey: process.env.DATABASE_API_KEY,
  options: {
    auth: {
      autoRefreshToken: true,
      persistSession: true
    }
  }
}";

/// SQL schema: a `users` table plus one owned table and one `user_id` index
/// per feature.
pub fn database_schema(features: &[String], database: &str) -> String {
    let tables = features
        .iter()
        .map(|feature| {
            FEATURE_TABLE_TEMPLATE
                .replace("%FEATURE%", feature)
                .replace("%TABLE%", &table_name(feature))
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let indexes = features
        .iter()
        .map(|feature| {
            let table = table_name(feature);
            format!("CREATE INDEX idx_{table}_user_id ON {table}(user_id);")
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "-- {database} Database Schema\n{USERS_TABLE}\n\n{tables}\n\n\
         -- Indexes for performance\nCREATE INDEX idx_users_email ON users(email);\n{indexes}"
    )
}

pub fn database_config_file(database: &str) -> String {
    CONFIG_TEMPLATE.replace("%DATABASE%", database)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_has_table_and_index_per_feature() {
        let schema = database_schema(&["Team Chat".to_string(), "Reports".to_string()], "supabase");
        assert!(schema.starts_with("-- supabase Database Schema\n-- Users table"));
        assert!(schema.contains("CREATE TABLE team_chat ("));
        assert!(schema.contains("CREATE TABLE reports ("));
        assert!(schema.contains("CREATE INDEX idx_team_chat_user_id ON team_chat(user_id);"));
        assert!(schema.ends_with("CREATE INDEX idx_reports_user_id ON reports(user_id);"));
        assert_eq!(schema.matches("CREATE TABLE").count(), 3);
    }

    #[test]
    fn config_names_the_backend() {
        assert!(database_config_file("firebase").contains("type: 'firebase',"));
    }
}
