//! Both queue strategies must produce the same dequeue sequence for the same script.

use rand::{thread_rng, Rng};
use simple_queue::{ArrayQueue, Queue, StackQueue};

#[derive(Clone, Copy, Debug)]
enum Op {
    Enqueue(u32),
    Dequeue,
}

fn script(len: usize) -> Vec<Op> {
    let mut rng = thread_rng();
    // Vary the mix so that some scripts drain the queue often and others let it grow.
    let enqueue_ratio = rng.gen_range(0.2..0.8);
    (0..len)
        .map(|_| {
            if rng.gen_bool(enqueue_ratio) {
                Op::Enqueue(rng.gen())
            } else {
                Op::Dequeue
            }
        })
        .collect()
}

/// Runs `ops` and records what every dequeue and peek returned.
fn run<Q: Queue<Item = u32> + ?Sized>(q: &mut Q, ops: &[Op]) -> Vec<(Option<u32>, Option<u32>)> {
    let mut out = Vec::new();
    for op in ops {
        match *op {
            Op::Enqueue(x) => q.enqueue(x),
            Op::Dequeue => {
                let value = q.dequeue();
                out.push((value, q.peek().copied()));
            }
        }
        assert_eq!(q.is_empty(), q.peek().is_none());
    }
    out
}

/// Replays `ops` against a plain model of the queue.
fn model(ops: &[Op]) -> Vec<(Option<u32>, Option<u32>)> {
    let mut content = Vec::new();
    let mut out = Vec::new();
    for op in ops {
        match *op {
            Op::Enqueue(x) => content.push(x),
            Op::Dequeue => {
                let value = if content.is_empty() {
                    None
                } else {
                    Some(content.remove(0))
                };
                out.push((value, content.first().copied()));
            }
        }
    }
    out
}

#[test]
fn same_sequence() {
    let runs: usize = if cfg!(miri) { 3 } else { 100 };
    let len: usize = if cfg!(miri) { 50 } else { 2_000 };

    for _ in 0..runs {
        let ops = script(len);
        let expected = model(&ops);

        let mut a = ArrayQueue::new();
        let mut s = StackQueue::new();
        assert_eq!(run(&mut a, &ops), expected);
        assert_eq!(run(&mut s, &ops), expected);

        assert_eq!(a.len(), s.len());
        assert_eq!(a.describe(), s.describe());
    }
}

#[test]
fn dyn_queues() {
    let mut queues: Vec<Box<dyn Queue<Item = u32>>> =
        vec![Box::new(ArrayQueue::<u32>::new()), Box::new(StackQueue::<u32>::new())];
    let ops = script(500);
    let expected = model(&ops);

    for q in queues.iter_mut() {
        assert_eq!(run(&mut **q, &ops), expected);
    }
}
