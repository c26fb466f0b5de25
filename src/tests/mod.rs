mod test_agent;
mod test_env;
mod test_optimizer;
mod test_schedule;
