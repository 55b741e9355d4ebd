use std::time::Instant;

pub struct Timer{
    time: Instant,
    prev: u128,
}

impl Timer{
    pub fn new() -> Self{
        let time = Instant::now();
        let prev = time.elapsed().as_millis();
        Self{ time, prev }
    }

    /// Milliseconds since the last checkpoint.
    pub fn elapsed(&self) -> u128{
        self.time.elapsed().as_millis() - self.prev
    }

    pub fn checkpoint(&mut self){
        self.prev = self.time.elapsed().as_millis();
    }

    /// Elapsed time of the stage that just finished, then start the next one.
    pub fn lap(&mut self) -> u128{
        let ms = self.elapsed();
        self.checkpoint();
        ms
    }

    pub fn total(&self) -> u128{
        self.time.elapsed().as_millis()
    }
}

#[cfg(test)]
mod tests{
    use super::*;

    #[test]
    fn lap_resets_the_stage(){
        let mut timer = Timer::new();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let first = timer.lap();
        assert!(first >= 5);
        assert!(timer.elapsed() < first + 5);
        assert!(timer.total() >= first);
    }
}
