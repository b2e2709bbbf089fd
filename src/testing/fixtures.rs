//! Files as `create-nuxt-app` leaves them.

use super::TestFiles;

pub const NUXT_CONFIG: &str = "export default {
  head: {
    title: 'my-app',
  },

  // Modules: https://go.nuxtjs.dev/config-modules
  modules: [
  ],

  build: {
  }
}
";

pub const ENV_FILE: &str = "API_BASE_URL            = ''
API_SW_ACCESS_KEY       = ''
";

/// Seed the files the generator and plugin postinstall would have produced.
pub fn seed_generated_project(files: &TestFiles) {
    files.add("nuxt.config.js", NUXT_CONFIG);
    files.add(".env", ENV_FILE);
    files.add("pages/index.vue", "<template><Tutorial/></template>\n");
    files.add("layouts/default.vue", "<template><Nuxt/></template>\n");
}
